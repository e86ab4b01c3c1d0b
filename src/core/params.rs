use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::LogLevel;

pub const DEFAULT_LOG_FILE: &str = "log.txt";
pub const DEFAULT_LOGGER_NAME: &str = "root";

/// Log file parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File that records are appended to; created if absent
    pub path: PathBuf,
    /// Name written between the level and the message of each record
    pub logger_name: String,
    /// Records below this level are dropped
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = LogConfig::default();
        assert_eq!(config.path, PathBuf::from("log.txt"));
        assert_eq!(config.logger_name, "root");
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "logger_name": "scaffold", "level": "error" }}"#).unwrap();

        let config = LogConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.logger_name, "scaffold");
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.path, PathBuf::from("log.txt"));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LogConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
