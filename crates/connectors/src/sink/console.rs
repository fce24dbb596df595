use crate::{file::csv::error::FileError, sink::SqlSink};
use std::io::{self, Stdout, Write};

const BANNER_START: &str = "--- Generated SQL INSERT Statements ---";
const BANNER_END: &str = "--- End of SQL ---";

/// Prints statements between a start and end banner.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SqlSink for ConsoleSink<W> {
    fn write_statements(&mut self, statements: &[String]) -> Result<(), FileError> {
        writeln!(self.out)?;
        writeln!(self.out, "{BANNER_START}")?;
        for stmt in statements {
            writeln!(self.out, "{stmt}")?;
        }
        writeln!(self.out, "{BANNER_END}")?;
        self.out.flush()?;
        Ok(())
    }
}
