use clap::Parser;
use connectors::file::csv::settings::CsvSettings;
use engine_core::settings::ConvertSettings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv2sql",
    version,
    about = "Convert a CSV file to SQL INSERT statements"
)]
pub struct Cli {
    /// Path to the input CSV file
    pub csv_file: PathBuf,

    /// Name of the SQL table
    pub table_name: String,

    #[arg(
        short,
        long,
        help = "Path to the output .sql file (prints to console if not provided)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value_t = ',',
        help = "Delimiter used in the CSV file"
    )]
    pub delimiter: char,

    #[arg(long, help = "Specify if the CSV file does not have a header row")]
    pub no_header: bool,

    #[arg(
        short,
        long,
        default_value_t = 0,
        help = "Number of rows per INSERT statement (0 for one INSERT per row)"
    )]
    pub batch_size: usize,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "An integer category ID to add to each row"
    )]
    pub category_id: Option<i64>,
}

impl Cli {
    pub fn into_settings(self) -> ConvertSettings {
        ConvertSettings::new(self.csv_file, &self.table_name)
            .with_output(self.output)
            .with_csv(CsvSettings::new(self.delimiter, !self.no_header))
            .with_batch_size(self.batch_size)
            .with_category_id(self.category_id)
    }
}
