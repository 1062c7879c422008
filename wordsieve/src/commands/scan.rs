// wordsieve/src/commands/scan.rs
//! `scan` subcommand: list matches and a per-term summary without modifying
//! the input.

use anyhow::Result;
use log::info;

use wordsieve_core::{summarize_matches, ScanEngine};

use crate::cli::ScanCommand;
use crate::ui;

pub fn run(engine: &dyn ScanEngine, args: &ScanCommand) -> Result<()> {
    info!("Starting scan operation.");
    let input = super::read_input(args.input_file.as_deref())?;

    let matches = engine.scan(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for m in &matches {
            println!("[{}..{}] {}", m.start, m.end, m.term);
        }
        ui::print_summary(&summarize_matches(&matches));
    }

    info!("Scan operation completed.");
    Ok(())
}
