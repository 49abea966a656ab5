use std::{
    io::BufRead,
    thread::{self, JoinHandle},
};

use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    parser::KeyExtractor,
    statistic::HitCounter,
};

/// Feeds every line of `reader` into `counter` until end of input.
///
/// Returns the number of lines counted. Lines that are not valid UTF-8 are
/// decoded lossily rather than dropped.
pub fn ingest<R: BufRead>(
    mut reader: R,
    counter: &HitCounter,
    extractor: &KeyExtractor,
) -> Result<u64> {
    let mut buf = Vec::new();
    let mut lines = 0u64;
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(Error::Ingest)?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_newline(&buf));
        counter.increment(extractor.extract(&line));
        lines += 1;
    }
    Ok(lines)
}

fn trim_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Background thread running [`ingest`].
///
/// End of input stops the thread but leaves the counts in place. Dropping an
/// `Ingestor` detaches the thread; call [`Ingestor::join`] to wait for it.
pub struct Ingestor {
    thread: JoinHandle<Result<u64>>,
}

impl Ingestor {
    pub fn spawn<R>(reader: R, counter: HitCounter, extractor: KeyExtractor) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let thread = thread::spawn(move || {
            debug!("ingestion started");
            let result = ingest(reader, &counter, &extractor);
            match &result {
                Ok(lines) => info!(lines, "end of input, counts kept"),
                Err(e) => warn!(error = %e, "ingestion stopped"),
            }
            result
        });
        Ingestor { thread }
    }

    /// Waits for end of input.
    pub fn join(self) -> Result<u64> {
        self.thread
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}
