use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::error::{Error, Result};
use crate::types::LogLevel;

/// Appends one `<LEVEL>:<logger-name>:<message>` line per event to a file.
pub struct FileLogLayer {
    file: Mutex<File>,
    logger_name: String,
}

impl FileLogLayer {
    /// Opens `path` in append mode, creating it if absent.
    pub fn open(path: &Path, logger_name: impl Into<String>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file: Mutex::new(file),
            logger_name: logger_name.into(),
        })
    }
}

pub fn format_record(level: LogLevel, logger_name: &str, message: &str) -> String {
    format!("{}:{}:{}", level.as_str(), logger_name, message)
}

struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for FileLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let line = format_record(
            LogLevel::from_tracing(metadata.level()),
            &self.logger_name,
            &visitor.message,
        );

        // A record that cannot be written is dropped; the run itself is unaffected.
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}").and_then(|()| file.flush());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    #[test]
    fn record_format() {
        assert_eq!(
            format_record(LogLevel::Error, "root", "ValueError: bad"),
            "ERROR:root:ValueError: bad"
        );
    }

    #[test]
    fn events_are_appended_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "INFO:root:earlier\n").unwrap();

        let layer = FileLogLayer::open(&path, "scaffold").unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first {}", 1);
            tracing::warn!("second");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "INFO:root:earlier\nINFO:scaffold:first 1\nWARNING:scaffold:second\n"
        );
    }

    #[test]
    fn unopenable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let err = FileLogLayer::open(&path, "root").err().unwrap();
        assert!(matches!(err, Error::LogFile { .. }));
    }
}
