// wordsieve/src/commands/context.rs
//! `context` subcommand: print the sentence window enclosing all matches.

use anyhow::Result;
use log::info;

use wordsieve_core::ScanEngine;

use crate::cli::ContextCommand;
use crate::ui;

pub fn run(engine: &dyn ScanEngine, args: &ContextCommand) -> Result<()> {
    info!("Starting context operation.");
    let input = super::read_input(args.input_file.as_deref())?;

    match engine.extract_context(&input) {
        Some(context) => println!("{}", context),
        None => ui::info_msg("No matches found; nothing to extract."),
    }

    info!("Context operation completed.");
    Ok(())
}
