use std::path::PathBuf;

use thiserror::Error;

/// Setup failures for the CLI. Runner outcomes are never reported through here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: changeme::Error,
    },

    #[error("Cannot set up logging: {0}")]
    Logger(#[source] changeme::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
