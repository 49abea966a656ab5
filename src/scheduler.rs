use std::time::Duration;

use crossbeam::{
    channel::{Receiver, after, never},
    select,
};
use tracing::{debug, error, info};

use crate::{
    error::{Error, Result},
    rank::{RankedEntry, rank},
    statistic::HitCounter,
};

/// Output side of a report cycle.
pub trait Renderer {
    fn render(&mut self, entries: &[RankedEntry], limit: usize) -> std::io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, entries: &[RankedEntry], limit: usize) -> std::io::Result<()> {
        (**self).render(entries, limit)
    }
}

/// Drives report cycles on a fixed interval.
///
/// The timer is re-armed only after a cycle has finished, so a slow renderer
/// pushes the next report back instead of overlapping it.
pub struct ReportScheduler {
    counter: HitCounter,
    interval: Duration,
    limit: usize,
    shutdown: Receiver<()>,
}

impl ReportScheduler {
    pub fn new(counter: HitCounter, interval: Duration, limit: usize) -> Self {
        Self {
            counter,
            interval,
            limit,
            shutdown: never(),
        }
    }

    /// Ends the run loop when a message arrives or every sender is dropped.
    pub fn with_shutdown(mut self, shutdown: Receiver<()>) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// One snapshot, rank and render pass.
    pub fn run_once<R: Renderer>(&self, renderer: &mut R) -> Result<()> {
        let snapshot = self.counter.snapshot();
        let entries = rank(&snapshot, self.limit);
        debug!(
            entries = entries.len(),
            distinct_keys = snapshot.len(),
            total_hits = snapshot.total_hits(),
            "report cycle"
        );
        renderer.render(&entries, self.limit).map_err(|e| {
            error!(error = %e, "renderer failed, stopping reports");
            Error::Render(e)
        })
    }

    /// Runs report cycles until shutdown or the first render failure.
    pub fn run<R: Renderer>(&self, mut renderer: R) -> Result<()> {
        loop {
            let timer = after(self.interval);
            select! {
                recv(timer) -> _ => self.run_once(&mut renderer)?,
                recv(self.shutdown) -> _ => {
                    info!("report loop shut down");
                    return Ok(());
                }
            }
        }
    }
}
