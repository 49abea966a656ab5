pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod parser;
pub mod rank;
pub mod render;
pub mod scheduler;
pub mod statistic;

pub use error::{Error, Result};
pub use parser::{KeyExtractor, parse};
pub use rank::{RankedEntry, rank};
pub use scheduler::{Renderer, ReportScheduler};
pub use statistic::{HitCounter, Snapshot};
