use crate::{commands::Cli, error::CliError};
use clap::Parser;
use engine_core::convert::Converter;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

fn main() -> ExitCode {
    // Initialize logger; stdout is reserved for the generated SQL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = cli.into_settings();
    debug!("Converting with settings: {settings:?}");

    let conversion = Converter::new(settings).run()?;
    debug!(
        "Wrote {} statements ({} rows)",
        conversion.statements.len(),
        conversion.rows_converted
    );
    Ok(())
}
