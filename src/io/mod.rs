//! I/O layer for log records.
//! Provides the append-only `log_file` tracing layer and the `logger` that
//! owns a dispatcher built around it.
pub mod log_file;
pub use log_file::FileLogLayer;

pub mod logger;
pub use logger::{RECORD_TARGET, RunLogger};
