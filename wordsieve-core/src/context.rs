// wordsieve-core/src/context.rs
//! Sentence-level context extraction around detected matches.
//!
//! Given the matches found by a scan pass, the extractor widens the
//! first-to-last match range outward to the nearest sentence delimiter on
//! each side and returns the enclosed window, for downstream consumers that
//! need the surrounding sentence rather than the bare match (e.g. dataset
//! curation).

use std::collections::HashSet;

use crate::term_match::TermMatch;

/// Sentence delimiters used when no override is configured: the full stop
/// and semicolon of the corpus script the default vocabulary targets.
pub const DEFAULT_SENTENCE_DELIMITERS: [char; 2] = ['。', '；'];

/// Expands match spans outward to the nearest sentence delimiters.
#[derive(Debug, Clone)]
pub struct ContextExtractor {
    delimiters: HashSet<char>,
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SENTENCE_DELIMITERS)
    }
}

impl ContextExtractor {
    pub fn new<I>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }

    /// Returns the minimal sentence window enclosing every match.
    ///
    /// The window starts immediately after the nearest delimiter at or before
    /// the first match's start (the beginning of `text` if there is none) and
    /// ends immediately before the nearest delimiter at or after the last
    /// match's end (the end of `text` if there is none); delimiters
    /// themselves are excluded. Indices are character positions, and
    /// `matches` must be the left-to-right spans a scan produced over this
    /// same `text`.
    ///
    /// Returns `None` when `matches` is empty: nothing to extract.
    pub fn extract(&self, text: &str, matches: &[TermMatch]) -> Option<String> {
        let (first, last) = match (matches.first(), matches.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return None,
        };

        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return None;
        }
        let true_start = first.start.min(chars.len() - 1);
        let true_end = last.end.min(chars.len());

        let context_start = (0..=true_start)
            .rev()
            .find(|&i| self.delimiters.contains(&chars[i]))
            .map(|i| i + 1)
            .unwrap_or(0);
        let context_end = (true_end..chars.len())
            .find(|&i| self.delimiters.contains(&chars[i]))
            .unwrap_or(chars.len());

        Some(chars[context_start..context_end].iter().collect())
    }
}
