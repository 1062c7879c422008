//! Configuration management for `wordsieve-core`.
//!
//! This module defines the vocabulary configuration consumed at engine
//! construction time. It handles serialization/deserialization of YAML
//! vocabulary files and provides utilities for loading and validating them.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::context::DEFAULT_SENTENCE_DELIMITERS;
use crate::errors::WordsieveError;
use crate::matcher::DEFAULT_NOISE_CHARS;
use crate::term_match::loggable_term;

/// Declarative description of a vocabulary: the terms to detect plus
/// optional overrides for the noise set and sentence delimiters.
///
/// The matcher is rebuilt from this config whenever the vocabulary changes;
/// there is no incremental update path.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// The terms to detect, in supplier order.
    pub terms: Vec<String>,
    /// Overrides the default noise set when present.
    pub noise_chars: Option<Vec<char>>,
    /// Overrides the default sentence delimiters when present.
    pub sentence_delimiters: Option<Vec<char>>,
}

impl VocabularyConfig {
    /// Builds a config over `terms` with default noise and delimiters.
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            noise_chars: None,
            sentence_delimiters: None,
        }
    }

    /// Loads a vocabulary from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading vocabulary from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;
        let config: VocabularyConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse vocabulary file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded {} terms from file {}.",
            config.terms.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the embedded demo vocabulary.
    pub fn load_default_terms() -> Result<Self> {
        debug!("Loading default terms from embedded string...");
        let default_yaml = include_str!("../config/default_terms.yaml");
        let config: VocabularyConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default terms")?;

        debug!("Loaded {} default terms.", config.terms.len());
        Ok(config)
    }

    /// Effective noise set: the override when present, the built-in default
    /// otherwise.
    pub fn noise_chars(&self) -> Vec<char> {
        self.noise_chars
            .clone()
            .unwrap_or_else(|| DEFAULT_NOISE_CHARS.to_vec())
    }

    /// Effective sentence delimiters: the override when present, the
    /// built-in default otherwise.
    pub fn sentence_delimiters(&self) -> Vec<char> {
        self.sentence_delimiters
            .clone()
            .unwrap_or_else(|| DEFAULT_SENTENCE_DELIMITERS.to_vec())
    }

    /// Validates term integrity.
    ///
    /// Empty terms are rejected. Terms that can never match — single
    /// characters (suppressed by the scan's two-character floor) and terms
    /// carrying a noise character after their first character (the noise
    /// skip shadows the trie edge) — are accepted with a warning, since the
    /// matcher degrades gracefully around them.
    pub fn validate(&self) -> std::result::Result<(), WordsieveError> {
        let noise = self.noise_chars();
        let mut errors = Vec::new();

        for (idx, term) in self.terms.iter().enumerate() {
            if term.is_empty() {
                errors.push(format!("term #{} is empty", idx));
                continue;
            }
            if term.chars().count() < 2 {
                warn!(
                    "Term #{} ({}) is a single character and can never match.",
                    idx,
                    loggable_term(term)
                );
            }
            if term.chars().skip(1).any(|ch| noise.contains(&ch)) {
                warn!(
                    "Term #{} ({}) contains a noise character and can never match.",
                    idx,
                    loggable_term(term)
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(WordsieveError::InvalidVocabulary(errors.join("; ")))
        }
    }
}
