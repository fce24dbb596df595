use connectors::file::csv::error::FileError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV file not found at '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Row at line {line} has {found} fields, but the header has {expected}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write SQL output: {0}")]
    Write(#[source] FileError),
}

impl ConvertError {
    /// Wraps a reader failure, pulling a missing input file out as its own kind.
    pub fn read(path: &Path, source: FileError) -> Self {
        match source {
            FileError::NotFound(path) => ConvertError::InputNotFound(path),
            source => ConvertError::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::InputNotFound(_))
    }
}
