//! Crate-level error type and `Result` alias.
//! Validation failures are kept apart from everything an operation can fail with.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or incorrect argument: double check {arg}")]
    InvalidArgument { arg: &'static str },

    #[error("{0}")]
    Operation(String),

    #[error("operation panicked: {0}")]
    Panicked(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::Operation(e.to_string())
    }

    /// Validation failures are reported with the `ValueError` prefix, wherever they come from.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
