use std::io::{self, Write};

use tracing::{info, warn};

use changeme::{LogConfig, RunLogger, RunOutcome, run_change_me};

use super::args::CliArgs;
use super::errors::AppError;

/// Defaults, then the config file, then individual flags.
fn resolve_config(args: &CliArgs) -> Result<LogConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => LogConfig::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => LogConfig::default(),
    };

    if let Some(path) = &args.log_file {
        config.path = path.clone();
    }
    if let Some(level) = args.log_level {
        config.level = level;
    }

    Ok(config)
}

fn present(outcome: &RunOutcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        RunOutcome::Success { .. } => info!("{}", outcome.log_message()),
        RunOutcome::ValidationError(e) => warn!(error = %e, "argument rejected"),
        RunOutcome::OperationError { error, .. } => warn!(error = %error, "operation failed"),
    }
    writeln!(out, "{}", outcome.status_line())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;

    let logger = if args.log {
        RunLogger::with_console(&config)
    } else {
        RunLogger::new(&config)
    }
    .map_err(AppError::Logger)?;

    logger.in_scope(|| info!(log_file = ?config.path, "logging to file"));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = run_change_me(&args.change_me1, &logger, &mut out);
    logger
        .in_scope(|| present(&outcome, &mut out))
        .map_err(AppError::Io)?;

    Ok(())
}
