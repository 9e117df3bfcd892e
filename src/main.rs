// src/main.rs

use anyhow::Result;
use clap::Parser;
use hipify_tree::cli::Cli;
use hipify_tree::{ConversionError, Converter, DEFAULT_ROOT};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Exit status when the translator rejected a file and the run stopped
const EXIT_TRANSLATOR_FAILED: u8 = 2;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only conversion progress
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse();
    let root = Path::new(DEFAULT_ROOT);

    match Converter::with_defaults().convert(root) {
        Ok(summary) => {
            info!("Finished {}: {} file(s) converted", root.display(), summary.len());
            Ok(ExitCode::SUCCESS)
        }
        // The reporter has already printed the translator's output
        Err(ConversionError::TranslatorFailed { .. }) => {
            Ok(ExitCode::from(EXIT_TRANSLATOR_FAILED))
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Conversion of {} aborted", root.display()))),
    }
}
