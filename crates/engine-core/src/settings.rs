use crate::error::ConvertError;
use connectors::file::csv::settings::CsvSettings;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub input: PathBuf,
    pub table: String,
    /// Destination file; `None` prints to stdout.
    pub output: Option<PathBuf>,
    pub csv: CsvSettings,
    /// Rows per INSERT statement, 0 for one statement per row.
    pub batch_size: usize,
    /// Constant appended to every row as `category_id`.
    pub category_id: Option<i64>,
}

impl ConvertSettings {
    pub fn new(input: impl Into<PathBuf>, table: &str) -> Self {
        ConvertSettings {
            input: input.into(),
            table: table.to_string(),
            output: None,
            csv: CsvSettings::default(),
            batch_size: 0,
            category_id: None,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_csv(mut self, csv: CsvSettings) -> Self {
        self.csv = csv;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Checks the settings before any file is opened.
    pub fn validate(&self) -> Result<(), ConvertError> {
        self.csv
            .delimiter_byte()
            .map_err(|e| ConvertError::InvalidSettings(e.to_string()))?;
        Ok(())
    }
}
