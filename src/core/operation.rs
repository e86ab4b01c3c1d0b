//! The unit of work a runner invokes.
//!
//! `ChangeMe` is the placeholder shipped with the scaffold; real work is plugged in by
//! implementing [`Operation`] or passing a closure.
use std::io::Write;

use crate::error::Result;

pub const PLACEHOLDER_NAME: &str = "CHANGE_ME";

pub trait Operation {
    /// Name used in status lines and log records.
    fn name(&self) -> &str {
        PLACEHOLDER_NAME
    }

    fn call(&self, argument: &str, out: &mut dyn Write) -> Result<()>;
}

impl<F> Operation for F
where
    F: Fn(&str, &mut dyn Write) -> Result<()>,
{
    fn call(&self, argument: &str, out: &mut dyn Write) -> Result<()> {
        self(argument, out)
    }
}

/// Placeholder operation: announces the argument and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeMe;

impl Operation for ChangeMe {
    fn call(&self, argument: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Running {PLACEHOLDER_NAME} with argument: {argument}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_echoes_argument() {
        let mut out: Vec<u8> = Vec::new();
        ChangeMe.call("test", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Running CHANGE_ME with argument: test\n"
        );
        assert_eq!(ChangeMe.name(), "CHANGE_ME");
    }

    #[test]
    fn closures_are_operations() {
        let op = |arg: &str, out: &mut dyn Write| -> Result<()> {
            write!(out, "{}", arg.len())?;
            Ok(())
        };
        let mut out: Vec<u8> = Vec::new();
        op.call("four", &mut out).unwrap();
        assert_eq!(out, b"4");
        assert_eq!(op.name(), "CHANGE_ME");
    }
}
