use crate::{
    batch::StatementBatcher,
    columns::{CATEGORY_ID_COLUMN, resolve_columns},
    error::ConvertError,
    settings::ConvertSettings,
};
use connectors::{
    file::csv::{adapter::CsvAdapter, source::CsvDataSource},
    sink::{ConsoleSink, FileSink, SqlSink},
};
use model::{core::literal::Literal, records::row::RowData};
use planner::query::{
    ast::insert::Insert,
    dialect::{Dialect, MySql},
    renderer::to_sql,
};
use tracing::{debug, info, warn};

/// Result of converting one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub statements: Vec<String>,
    pub rows_converted: usize,
    pub rows_skipped: usize,
}

/// Converts the rows of a delimited file into INSERT statements.
pub struct Converter {
    settings: ConvertSettings,
    dialect: Box<dyn Dialect>,
}

impl Converter {
    pub fn new(settings: ConvertSettings) -> Self {
        Self {
            settings,
            dialect: Box::new(MySql),
        }
    }

    /// Reads the whole input and renders every statement in row order.
    /// Nothing is written.
    pub fn generate(&self) -> Result<Conversion, ConvertError> {
        self.settings.validate()?;

        let input = &self.settings.input;
        let adapter = CsvAdapter::open(input, self.settings.csv.clone())
            .map_err(|e| ConvertError::read(input, e))?;

        if self.settings.csv.has_headers {
            info!("Read CSV headers: {}", adapter.headers.join(", "));
        } else {
            info!("No header row assumed in CSV.");
        }

        let columns = resolve_columns(&adapter.headers, self.settings.category_id);
        self.log_columns(&columns);
        let header_len = adapter.headers.len();

        let mut source = CsvDataSource::new(adapter);
        let mut batcher =
            StatementBatcher::new(&self.settings.table, columns, self.settings.batch_size);
        let category = self.settings.category_id.map(Literal::integer);
        let mut conversion = Conversion::default();

        while let Some(row) = source.next() {
            let row = row.map_err(|e| ConvertError::read(input, e))?;
            let is_last = source.is_exhausted();

            if row.is_blank() {
                debug!("Skipping blank row at line {}", row.line);
                conversion.rows_skipped += 1;
                continue;
            }
            if self.settings.csv.has_headers && row.len() != header_len {
                return Err(ConvertError::FieldCount {
                    line: row.line,
                    expected: header_len,
                    found: row.len(),
                });
            }

            let values = row_values(&row, category.as_ref());
            conversion.rows_converted += 1;
            if let Some(insert) = batcher.push(values, is_last) {
                conversion.statements.push(self.render(&insert));
            }
        }

        // The last counted record may have been blank
        if let Some(insert) = batcher.finish() {
            conversion.statements.push(self.render(&insert));
        }

        info!(
            "Generated {} INSERT statements from {} rows ({} blank rows skipped)",
            conversion.statements.len(),
            conversion.rows_converted,
            conversion.rows_skipped
        );
        Ok(conversion)
    }

    /// Generates every statement, then writes them to the configured output
    /// file or to stdout.
    pub fn run(&self) -> Result<Conversion, ConvertError> {
        match &self.settings.output {
            Some(path) => self.run_with(&mut FileSink::new(path)),
            None => self.run_with(&mut ConsoleSink::stdout()),
        }
    }

    pub fn run_with(&self, sink: &mut dyn SqlSink) -> Result<Conversion, ConvertError> {
        let conversion = self.generate()?;
        sink.write_statements(&conversion.statements)
            .map_err(ConvertError::Write)?;
        Ok(conversion)
    }

    fn render(&self, insert: &Insert) -> String {
        to_sql(insert, self.dialect.as_ref())
    }

    fn log_columns(&self, columns: &[String]) {
        if self.settings.category_id.is_some() && !self.settings.csv.has_headers {
            info!("Adding column: '{CATEGORY_ID_COLUMN}' for the provided category_id.");
            warn!(
                "Only '{CATEGORY_ID_COLUMN}' is named; ensure the table column order is the CSV columns then '{CATEGORY_ID_COLUMN}'."
            );
        }

        if columns.is_empty() {
            info!("No column names available; values follow the table's column order.");
        } else {
            let quoted: Vec<String> = columns
                .iter()
                .map(|c| self.dialect.quote_identifier(c))
                .collect();
            info!("Target SQL column names: ({})", quoted.join(", "));
        }
    }
}

/// Classifies every cell of the row and appends the category value, if any.
pub fn row_values(row: &RowData, category: Option<&Literal>) -> Vec<Literal> {
    let mut values: Vec<Literal> = row
        .cells
        .iter()
        .map(|cell| Literal::classify(Some(cell.trim())))
        .collect();
    if let Some(category) = category {
        values.push(category.clone());
    }
    values
}
