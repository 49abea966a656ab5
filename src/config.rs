use std::time::Duration;

use clap::Parser;

use crate::{
    error::{Error, Result},
    parser::KeyExtractor,
};

pub const DEFAULT_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Live top-N view of the busiest clients in an access log read from stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "hosttop", version)]
pub struct Cli {
    /// Seconds between screen refreshes
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// How many hosts to display
    #[arg(short = 'n', long = "num-hosts", default_value_t = DEFAULT_LIMIT)]
    pub num_hosts: usize,

    /// Regex whose first capture group is used as the key instead of the first field
    #[arg(short, long)]
    pub key_pattern: Option<String>,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub interval: Duration,
    pub limit: usize,
    pub extractor: KeyExtractor,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            limit: DEFAULT_LIMIT,
            extractor: KeyExtractor::default(),
            banner: true,
        }
    }
}

impl Cli {
    pub fn validate(self) -> Result<Config> {
        if self.interval == 0 {
            return Err(Error::Config("interval must be at least 1 second".into()));
        }
        if self.num_hosts == 0 {
            return Err(Error::Config("num-hosts must be at least 1".into()));
        }
        let extractor = match self.key_pattern.as_deref() {
            Some(pattern) => KeyExtractor::pattern(pattern)?,
            None => KeyExtractor::default(),
        };
        Ok(Config {
            interval: Duration::from_secs(self.interval),
            limit: self.num_hosts,
            extractor,
            banner: !self.no_banner,
        })
    }
}
