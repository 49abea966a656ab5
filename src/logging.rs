use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics go to stderr so they never interleave with the report on stdout.
/// Filtering follows `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
