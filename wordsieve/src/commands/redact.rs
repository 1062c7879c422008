// wordsieve/src/commands/redact.rs
//! `redact` subcommand: overwrite matched terms in the input.

use std::fs;

use anyhow::{Context, Result};
use log::{debug, info};

use wordsieve_core::ScanEngine;

use crate::cli::RedactCommand;
use crate::ui;

pub fn run(engine: &dyn ScanEngine, args: &RedactCommand) -> Result<()> {
    info!("Starting redact operation.");
    let input = super::read_input(args.input_file.as_deref())?;

    let redacted = engine.redact(&input);
    debug!(
        "Content redacted. Original length: {}, redacted length: {}.",
        input.len(),
        redacted.len()
    );

    match &args.output {
        Some(path) => {
            ui::info_msg(format!("Writing redacted content to file: {}", path.display()));
            fs::write(path, &redacted)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        }
        None => {
            println!("{}", redacted);
        }
    }

    info!("Redact operation completed.");
    Ok(())
}
