//! Shared types used across changeme.
//! Includes `LogLevel` and the explicit `RunOutcome` returned by the runner.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Severity of a log record, named the way records are written to the log file.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_tracing(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::ERROR => LogLevel::Error,
            tracing::Level::WARN => LogLevel::Warning,
            tracing::Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    pub fn to_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened when the runner was asked to run an operation.
#[derive(Debug)]
pub enum RunOutcome {
    Success { operation: String, argument: String },
    ValidationError(Error),
    OperationError { operation: String, error: Error },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }

    pub fn level(&self) -> LogLevel {
        match self {
            RunOutcome::Success { .. } => LogLevel::Info,
            RunOutcome::ValidationError(_) | RunOutcome::OperationError { .. } => LogLevel::Error,
        }
    }

    /// Line written to the log file for this outcome.
    pub fn log_message(&self) -> String {
        match self {
            RunOutcome::Success {
                operation,
                argument,
            } => format!("Successfully ran {operation} with argument: {argument}"),
            RunOutcome::ValidationError(e) => format!("ValueError: {e}"),
            RunOutcome::OperationError { operation, error } => {
                format!("Error occurred while running {operation}: {error}")
            }
        }
    }

    /// Line shown to the user on standard output.
    pub fn status_line(&self) -> String {
        match self {
            RunOutcome::Success { operation, .. } => {
                format!("Successfully ran {operation} without any errors")
            }
            RunOutcome::ValidationError(e) => format!("ValueError: {e}"),
            RunOutcome::OperationError { operation, error } => {
                format!("An error occurred while running {operation}: {error}")
            }
        }
    }
}
