// wordsieve/src/commands/mod.rs
//! Implementations of the wordsieve subcommands.

pub mod context;
pub mod redact;
pub mod scan;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Reads the text to scan from a file when one was given, stdin otherwise.
pub(crate) fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
