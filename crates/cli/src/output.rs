use crate::error::CliError;
use std::{
    error::Error,
    io::{self, Write},
};

/// Prints a failure for the user. A missing input gets a one-line message,
/// anything else is printed with its full chain of causes.
pub fn write_error(err: &CliError, out: &mut impl Write) -> io::Result<()> {
    match err {
        CliError::InputNotFound(_) => writeln!(out, "Error: {err}"),
        CliError::Conversion(inner) => {
            writeln!(out, "An error occurred: {err}")?;
            let mut source = inner.source();
            while let Some(cause) = source {
                writeln!(out, "  Caused by: {cause}")?;
                source = cause.source();
            }
            writeln!(out, "{inner:#?}")
        }
    }
}

pub fn print_error(err: &CliError) {
    // Nothing left to report to if stderr is gone
    let _ = write_error(err, &mut io::stderr().lock());
}
