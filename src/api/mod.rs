//! High-level library API: validate an argument, run an operation on it, and record the
//! outcome. Prefer these entrypoints over wiring the logger and operation by hand.
use std::any::Any;
use std::cell::Cell;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing::debug;

use crate::core::operation::{ChangeMe, Operation};
use crate::error::{Error, Result};
use crate::io::logger::RunLogger;
use crate::types::RunOutcome;

/// Name of the positional argument, as reported in validation failures.
pub const ARGUMENT_NAME: &str = "change_me1";

pub struct Runner<'l, O> {
    operation: O,
    logger: &'l RunLogger,
    argument_name: &'static str,
}

impl<'l, O: Operation> Runner<'l, O> {
    pub fn new(operation: O, logger: &'l RunLogger) -> Self {
        Self {
            operation,
            logger,
            argument_name: ARGUMENT_NAME,
        }
    }

    pub fn with_argument_name(mut self, name: &'static str) -> Self {
        self.argument_name = name;
        self
    }

    /// Run the operation once and append exactly one record for the outcome.
    ///
    /// An empty argument is rejected without calling the operation. Failures never
    /// escape: they come back as `ValidationError` or `OperationError`.
    pub fn run(&self, argument: &str, out: &mut dyn Write) -> RunOutcome {
        let operation = self.operation.name().to_string();

        let outcome = if argument.is_empty() {
            RunOutcome::ValidationError(Error::InvalidArgument {
                arg: self.argument_name,
            })
        } else {
            let result = self.logger.in_scope(|| {
                debug!(operation = %operation, argument, "invoking operation");
                invoke(&self.operation, argument, out)
            });
            match result {
                Ok(()) => RunOutcome::Success {
                    operation,
                    argument: argument.to_string(),
                },
                Err(e) if e.is_validation() => RunOutcome::ValidationError(e),
                Err(error) => RunOutcome::OperationError { operation, error },
            }
        };

        self.logger.record(outcome.level(), &outcome.log_message());
        outcome
    }
}

/// Run the placeholder operation against `argument`.
pub fn run_change_me(argument: &str, logger: &RunLogger, out: &mut dyn Write) -> RunOutcome {
    Runner::new(ChangeMe, logger).run(argument, out)
}

thread_local! {
    static IN_OPERATION: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wraps the process panic hook once so it stays silent while this thread is inside an
/// operation. Panics anywhere else still reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_OPERATION.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Calls the operation so that a panic surfaces only as `Error::Panicked`.
fn invoke<O: Operation + ?Sized>(operation: &O, argument: &str, out: &mut dyn Write) -> Result<()> {
    install_quiet_hook();
    let outer = IN_OPERATION.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(|| operation.call(argument, out)));
    IN_OPERATION.with(|flag| flag.set(outer));

    result.unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        debug!(panic = %message, "operation panicked");
        Err(Error::Panicked(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
