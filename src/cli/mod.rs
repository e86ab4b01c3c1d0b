//! Command Line Interface (CLI) layer for changeme.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that builds the logger, runs the
//! placeholder operation and prints the outcome.
//!
//! If you are embedding changeme into another application, prefer using
//! the high-level `changeme::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
