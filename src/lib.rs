#![doc = r#"
changeme — a scaffold for one-argument command-line tools.

The crate wires together the parts every small tool ends up needing: a required argument,
a validation step, a unit of work, a status line for the user and an append-only log file.
The unit of work is pluggable; the shipped placeholder (`CHANGE_ME`) only echoes its argument.

Run the placeholder
-------------------
```rust,no_run
use changeme::{LogConfig, RunLogger, run_change_me};

fn main() -> changeme::Result<()> {
    let logger = RunLogger::new(&LogConfig::default())?;
    let outcome = run_change_me("test", &logger, &mut std::io::stdout());
    println!("{}", outcome.status_line());
    Ok(())
}
```

Plug in your own operation
--------------------------
```rust,no_run
use std::io::Write;
use changeme::{Error, LogConfig, Operation, RunLogger, Runner};

struct Greet;

impl Operation for Greet {
    fn name(&self) -> &str {
        "GREET"
    }

    fn call(&self, argument: &str, out: &mut dyn Write) -> changeme::Result<()> {
        if argument.contains('/') {
            return Err(Error::external("names cannot contain '/'"));
        }
        writeln!(out, "Hello, {argument}!")?;
        Ok(())
    }
}

fn main() -> changeme::Result<()> {
    let logger = RunLogger::new(&LogConfig::with_path("greet.log"))?;
    let outcome = Runner::new(Greet, &logger).run("world", &mut std::io::stdout());
    assert!(outcome.is_success());
    Ok(())
}
```

Outcomes
--------
`Runner::run` never fails. It returns a [`RunOutcome`]: `Success`, `ValidationError`
(empty argument, or an `Error::InvalidArgument` raised by the operation) or
`OperationError` (anything else, panics included). Exactly one record is appended to the
log file per run, formatted as `<LEVEL>:<logger-name>:<message>`.

Useful modules
--------------
- [`api`] — the runner and its convenience entrypoints.
- [`core`] — the `Operation` trait, the placeholder, and `LogConfig`.
- [`io`] — the log file layer and `RunLogger`.
- [`types`] — `LogLevel` and `RunOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::operation::{ChangeMe, Operation};
pub use core::params::LogConfig;
pub use error::{Error, Result};
pub use types::{LogLevel, RunOutcome};

pub use io::{FileLogLayer, RunLogger};

pub use api::{ARGUMENT_NAME, Runner, run_change_me};
