use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to render report")]
    Render(#[source] io::Error),

    #[error("failed to read input stream")]
    Ingest(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
