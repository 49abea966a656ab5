use std::io;

use anyhow::Context;
use clap::Parser;
use crossbeam::channel::bounded;
use tracing::info;

use hosttop::{
    HitCounter, ReportScheduler,
    config::Cli,
    ingest::Ingestor,
    logging::init_logging,
    render::TextRenderer,
};

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().validate()?;
    init_logging();

    let (shutdown_tx, shutdown_rx) = bounded(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .context("failed to install interrupt handler")?;

    let mut renderer = TextRenderer::new(io::stdout().lock());
    if config.banner {
        renderer.banner().context("failed to write banner")?;
    }

    let counter = HitCounter::new();
    // Not joined: stdin may never reach EOF, and reports continue after it does.
    let _ingestor = Ingestor::spawn(
        io::BufReader::new(io::stdin()),
        counter.clone(),
        config.extractor,
    );

    info!(interval = ?config.interval, limit = config.limit, "reporting");
    ReportScheduler::new(counter, config.interval, config.limit)
        .with_shutdown(shutdown_rx)
        .run(renderer)?;

    info!("interrupted");
    Ok(())
}
