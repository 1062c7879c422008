// wordsieve/src/main.rs
//! WordSieve entry point.
//!
//! Parses the CLI, loads the vocabulary, compiles the scanning engine, and
//! dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use wordsieve::cli::{Cli, Commands};
use wordsieve::commands;
use wordsieve::logger;
use wordsieve_core::{ScanEngine, ScanOptions, TrieEngine, VocabularyConfig};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("wordsieve started. Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => VocabularyConfig::load_from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => VocabularyConfig::load_default_terms()?,
    };

    let options = match &args.command {
        Commands::Scan(cmd) => ScanOptions {
            policy: cmd.policy.into(),
            ..ScanOptions::default()
        },
        Commands::Redact(cmd) => ScanOptions {
            policy: cmd.policy.into(),
            replacement_char: cmd.replace_char,
        },
        Commands::Context(cmd) => ScanOptions {
            policy: cmd.policy.into(),
            ..ScanOptions::default()
        },
    };

    let engine: Box<dyn ScanEngine> =
        Box::new(TrieEngine::with_options(config, options).context("Failed to compile engine")?);

    match &args.command {
        Commands::Scan(cmd) => commands::scan::run(engine.as_ref(), cmd),
        Commands::Redact(cmd) => commands::redact::run(engine.as_ref(), cmd),
        Commands::Context(cmd) => commands::context::run(engine.as_ref(), cmd),
    }
}
