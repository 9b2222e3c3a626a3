// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser};
use std::path::PathBuf;

use crate::core::copier::copy_percentage;
use crate::core::fs::LocalFs;
use crate::models::{CopyReport, CopyRequest};
use crate::utils::print_status;

const EXAMPLES: &str = "\
Examples:
  pcopy ./photos ./sample 10 jpg      Copy the first 10% of .jpg files
  pcopy ./data ./subset 25 CSV        Copy the first 25% of .csv files (any case)
  pcopy ./src ./dst 50 '*'            Copy the first half of all files";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Directory to copy files from (only its top level is read)
    pub source_dir: PathBuf,

    /// Directory to copy files into (created if missing)
    pub target_dir: PathBuf,

    /// Percentage of matching files to copy (1-100, rounded up)
    #[arg(allow_hyphen_values = true)]
    pub percentage: String,

    /// File extension without the leading dot, or '*' for all files
    pub file_extension: String,
}

/// Full help text, printed when the command line has the wrong shape.
#[inline]
#[must_use]
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Runs one copy with the given arguments, printing progress to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The percentage is not an integer between 1 and 100
/// * The source directory does not exist
/// * No files match the extension
/// * The target directory cannot be created or a file fails to copy
#[inline]
pub fn run(args: Args) -> Result<CopyReport> {
    let request = CopyRequest::parse(
        &args.source_dir,
        &args.target_dir,
        &args.percentage,
        &args.file_extension,
    )?;

    match copy_percentage(&LocalFs, &request, print_status) {
        Ok(report) => Ok(report),
        Err(err) if err.is_validation() => Err(err.into()),
        Err(err) => Err(err).with_context(|| {
            format!(
                "Copy from '{}' to '{}' did not complete",
                args.source_dir.display(),
                args.target_dir.display()
            )
        }),
    }
}
