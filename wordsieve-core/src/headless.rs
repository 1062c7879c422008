// wordsieve-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core engine in headless mode (non-UI).
//! Provides helper functions for full, one-shot operations over strings.

use anyhow::Result;

use crate::config::VocabularyConfig;
use crate::engine::{ScanEngine, ScanOptions};
use crate::engines::trie_engine::TrieEngine;

/// Fully redacts an input string in a single call: compiles an engine from
/// `config`, finds all matches, and applies the replacement. This is the
/// primary entry point for non-interactive use when the engine is not
/// reused across inputs.
pub fn headless_redact_string(
    config: VocabularyConfig,
    options: ScanOptions,
    content: &str,
) -> Result<String> {
    let engine = TrieEngine::with_options(config, options)?;
    Ok(engine.redact(content))
}

/// One-shot sentence-context extraction: compiles an engine from `config`
/// and returns the window enclosing all matches, or `None` when nothing
/// matches.
pub fn headless_extract_context(
    config: VocabularyConfig,
    options: ScanOptions,
    content: &str,
) -> Result<Option<String>> {
    let engine = TrieEngine::with_options(config, options)?;
    Ok(engine.extract_context(content))
}
