//! Explicit logger instance handed to the runner.
//!
//! Nothing is installed globally: each `RunLogger` owns its own `tracing` dispatcher, and
//! events are routed to it only while the logger is in scope. Records go to the log file;
//! diagnostics from the rest of the crate only reach stderr when console output is on.
use tracing::Dispatch;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

use super::log_file::FileLogLayer;
use crate::core::params::LogConfig;
use crate::error::Result;
use crate::types::LogLevel;

/// Target carried by events that become log file records.
pub const RECORD_TARGET: &str = "changeme::record";

type StderrWriter = fn() -> std::io::Stderr;

pub struct RunLogger {
    dispatch: Dispatch,
}

impl RunLogger {
    pub fn new(config: &LogConfig) -> Result<Self> {
        Self::build::<StderrWriter>(config, None)
    }

    /// Like [`RunLogger::new`], and also mirrors every event to stderr at DEBUG.
    pub fn with_console(config: &LogConfig) -> Result<Self> {
        Self::build(config, Some((std::io::stderr as StderrWriter, true)))
    }

    /// Like [`RunLogger::with_console`], with diagnostics going to `writer` uncolored.
    pub fn with_console_writer<W>(config: &LogConfig, writer: W) -> Result<Self>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(config, Some((writer, false)))
    }

    fn build<W>(config: &LogConfig, console: Option<(W, bool)>) -> Result<Self>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let records = Targets::new().with_target(RECORD_TARGET, config.level.to_tracing());
        let file_layer =
            FileLogLayer::open(&config.path, config.logger_name.as_str())?.with_filter(records);

        let console_layer = console.map(|(writer, ansi)| {
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_filter(LevelFilter::DEBUG)
        });

        let subscriber = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Runs `f` with this logger as the default dispatcher for the current thread.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Appends one record, subject to the configured minimum level.
    pub fn record(&self, level: LogLevel, message: &str) {
        self.in_scope(|| match level {
            LogLevel::Debug => tracing::debug!(target: RECORD_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: RECORD_TARGET, "{message}"),
            LogLevel::Warning => tracing::warn!(target: RECORD_TARGET, "{message}"),
            LogLevel::Error => tracing::error!(target: RECORD_TARGET, "{message}"),
        });
    }
}

/// In-memory console writer for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
