use engine_core::error::ConvertError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("CSV file not found at '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("{0}")]
    Conversion(ConvertError),
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InputNotFound(path) => CliError::InputNotFound(path),
            other => CliError::Conversion(other),
        }
    }
}
