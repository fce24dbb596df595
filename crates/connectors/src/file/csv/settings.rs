use crate::file::csv::error::FileError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSettings {
    pub delimiter: char,
    pub has_headers: bool,
}

impl CsvSettings {
    pub fn new(delimiter: char, has_headers: bool) -> Self {
        CsvSettings {
            delimiter,
            has_headers,
        }
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, FileError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(FileError::InvalidDelimiter(self.delimiter))
        }
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings::new(',', true)
    }
}
