// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use clap::error::ErrorKind;
use std::process;

use pcopy::utils::init_tracing;
use pcopy::{Args, run, usage};

fn main() -> Result<()> {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            tracing::debug!(error = %err, "rejected command line");
            print!("{}", usage());
            process::exit(1);
        }
    };

    run(args)?;
    Ok(())
}
