use crate::file::csv::error::FileError;

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

/// Destination for rendered statements.
pub trait SqlSink {
    /// Writes every statement in order. Called once, after all statements
    /// have been generated.
    fn write_statements(&mut self, statements: &[String]) -> Result<(), FileError>;
}
