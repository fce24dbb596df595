use crate::file::csv::{error::FileError, settings::CsvSettings};
use std::{fs::File, io, path::Path};
use tracing::debug;

pub struct CsvAdapter {
    /// Trimmed header fields; empty when the file has no header row.
    pub headers: Vec<String>,
    /// Data records after the header, blank ones included.
    pub row_count: usize,

    /// Used as a one-pass streaming iterator for actual data rows
    data_iter: csv::StringRecordsIntoIter<File>,
}

impl CsvAdapter {
    /// Opens the file twice: the first reader takes the header and counts the
    /// data records, the second is kept for streaming the rows.
    pub fn open(path: &Path, settings: CsvSettings) -> Result<Self, FileError> {
        // Build a shared builder so both readers treat the header the same way.
        // Records may differ in length; field counts are checked by the caller.
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(settings.delimiter_byte()?)
            .has_headers(settings.has_headers)
            .flexible(true)
            .trim(csv::Trim::All);

        // Open file + reader for metadata
        let mut meta_rdr = builder.from_reader(open_file(path)?);
        let headers: Vec<String> = if settings.has_headers {
            meta_rdr.headers()?.iter().map(String::from).collect()
        } else {
            Vec::new()
        };
        if settings.has_headers && headers.is_empty() {
            return Err(FileError::MissingHeader(path.to_path_buf()));
        }

        let mut row_count = 0;
        for record in meta_rdr.records() {
            record?;
            row_count += 1;
        }
        debug!("Counted {} data records in {}", row_count, path.display());

        // Open file + into_records iterator for streaming data
        let data_rdr = builder.from_reader(open_file(path)?);
        let data_iter = data_rdr.into_records();

        Ok(CsvAdapter {
            headers,
            row_count,
            data_iter,
        })
    }

    pub fn next_record(&mut self) -> Option<Result<csv::StringRecord, FileError>> {
        self.data_iter
            .next()
            .map(|record| record.map_err(FileError::from))
    }
}

fn open_file(path: &Path) -> Result<File, FileError> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::IoError(err),
    })
}
