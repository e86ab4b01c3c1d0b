//! changeme CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the placeholder operation, and
//! exit. Runner outcomes, failures included, exit with status 0; only setup failures
//! (unreadable config, unopenable log file) print an error and exit with status 1.
//! For programmatic use, prefer the library API (`changeme::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
