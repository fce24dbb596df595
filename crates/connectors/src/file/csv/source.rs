use crate::file::csv::{adapter::CsvAdapter, error::FileError};
use model::records::row::RowData;

/// Streams the data rows of a CSV file in order.
pub struct CsvDataSource {
    pub adapter: CsvAdapter,
    /// Tracks how many records have been consumed from the file.
    rows_read: usize,
}

impl CsvDataSource {
    pub fn new(adapter: CsvAdapter) -> Self {
        CsvDataSource {
            adapter,
            rows_read: 0,
        }
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Number of data records counted when the file was opened.
    pub fn row_count(&self) -> usize {
        self.adapter.row_count
    }

    /// True once the last counted record has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.rows_read >= self.adapter.row_count
    }
}

impl Iterator for CsvDataSource {
    type Item = Result<RowData, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.adapter.next_record()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };
        self.rows_read += 1;

        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(self.rows_read as u64);
        let cells = record.iter().map(String::from).collect();
        Some(Ok(RowData::new(line, cells)))
    }
}
