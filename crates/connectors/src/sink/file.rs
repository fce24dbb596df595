use crate::{file::csv::error::FileError, sink::SqlSink};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

/// Writes one statement per line, replacing any existing file.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: &Path) -> Self {
        FileSink {
            path: path.to_path_buf(),
        }
    }

    fn write_err(&self, source: std::io::Error) -> FileError {
        FileError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl SqlSink for FileSink {
    fn write_statements(&mut self, statements: &[String]) -> Result<(), FileError> {
        let file = File::create(&self.path).map_err(|e| self.write_err(e))?;
        let mut writer = BufWriter::new(file);
        for stmt in statements {
            writeln!(writer, "{stmt}").map_err(|e| self.write_err(e))?;
        }
        writer.flush().map_err(|e| self.write_err(e))?;

        info!("SQL INSERT statements saved to: {}", self.path.display());
        Ok(())
    }
}
