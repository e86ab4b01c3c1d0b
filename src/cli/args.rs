use clap::Parser;
use std::path::PathBuf;

use changeme::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "changeme",
    version,
    about = "Run CHANGE_ME on one argument and record the outcome in a log file"
)]
pub struct CliArgs {
    /// Argument handed to CHANGE_ME; an empty value is rejected
    pub change_me1: String,

    /// Log file that records are appended to [default: log.txt]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// JSON file with log settings (path, logger_name, level)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum level written to the log file [default: info]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable diagnostic logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
