// wordsieve-core/src/matcher.rs
//! Trie-based multi-pattern scanning over text.
//!
//! [`TermMatcher`] compiles a vocabulary into a prefix trie once and answers
//! scan queries against arbitrary text, tolerating interleaved noise
//! characters inside a candidate match. All spans are half-open character
//! (codepoint) index ranges into the scanned text.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::term_match::{loggable_term, TermMatch};
use crate::trie::{Trie, ROOT};

/// Noise characters skipped mid-match when no override is configured.
pub const DEFAULT_NOISE_CHARS: [char; 17] = [
    ' ', '&', '!', '！', '@', '#', '$', '￥', '*', '^', '%', '?', '？', '<', '>', '《', '》',
];

/// Policy applied when a terminal trie node is reached mid-scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Stop at the first complete vocabulary entry.
    #[default]
    Shortest,
    /// Keep scanning past the first complete entry, seeking a longer one.
    Longest,
}

/// Multi-pattern matcher compiled once from a vocabulary.
///
/// Immutable after construction; queries never mutate shared state, so a
/// matcher can be shared read-only across threads.
#[derive(Debug)]
pub struct TermMatcher {
    trie: Trie,
    noise: HashSet<char>,
}

impl TermMatcher {
    /// Compiles `vocabulary` with the default noise set.
    ///
    /// An empty vocabulary yields a matcher that matches nothing. Duplicate
    /// entries are idempotent.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_noise_chars(vocabulary, DEFAULT_NOISE_CHARS)
    }

    /// Compiles `vocabulary` with an explicit noise set.
    pub fn with_noise_chars<I, S, N>(vocabulary: I, noise_chars: N) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        N: IntoIterator<Item = char>,
    {
        let mut trie = Trie::new();
        let mut entry_count = 0usize;
        for entry in vocabulary {
            trie.insert(entry.as_ref());
            entry_count += 1;
        }
        let noise: HashSet<char> = noise_chars.into_iter().collect();
        debug!(
            "Compiled matcher trie: {} entries, {} nodes, {} noise chars.",
            entry_count,
            trie.node_count(),
            noise.len()
        );
        Self { trie, noise }
    }

    /// The compiled trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Scans for a single match starting exactly at character index `start`.
    ///
    /// Returns the total number of characters consumed by the match (matched
    /// characters plus any noise characters skipped along the way), or 0 when
    /// no vocabulary entry completes from `start`. Noise characters are only
    /// skipped once the scan has descended at least one trie edge; a noise
    /// character at `start` itself ends the scan. Consumption totals below
    /// two characters are suppressed, so a single-character entry never
    /// produces a match.
    ///
    /// Under [`MatchPolicy::Shortest`] the scan stops at the first complete
    /// entry; under [`MatchPolicy::Longest`] it keeps consuming in search of
    /// a longer completion, and the returned count reflects everything
    /// consumed up to the point the scan ended.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of `text` in characters; that is a
    /// caller bug, not a no-match condition.
    pub fn scan_from(&self, text: &str, start: usize, policy: MatchPolicy) -> usize {
        let chars: Vec<char> = text.chars().collect();
        assert!(
            start <= chars.len(),
            "scan start index {} is out of range for input of {} characters",
            start,
            chars.len()
        );
        self.scan_at(&chars, start, policy)
    }

    fn scan_at(&self, chars: &[char], start: usize, policy: MatchPolicy) -> usize {
        let mut node = ROOT;
        let mut consumed = 0usize;
        let mut hit = false;

        for &ch in &chars[start..] {
            if node != ROOT && self.noise.contains(&ch) {
                consumed += 1;
                continue;
            }
            match self.trie.child(node, ch) {
                Some(next) => {
                    node = next;
                    consumed += 1;
                    if self.trie.is_terminal(next) {
                        hit = true;
                        if policy == MatchPolicy::Shortest {
                            break;
                        }
                    }
                }
                None => break,
            }
        }

        // Sub-2-character consumptions never count as a match.
        if consumed < 2 || !hit {
            0
        } else {
            consumed
        }
    }

    /// Whether at least one vocabulary entry occurs anywhere in `text`.
    /// Short-circuits on the first hit.
    pub fn contains(&self, text: &str, policy: MatchPolicy) -> bool {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).any(|i| self.scan_at(&chars, i, policy) > 0)
    }

    /// All matches in `text`, left to right.
    ///
    /// After reporting a match the scan resumes past its end, so the returned
    /// spans are non-decreasing in `start` and never overlap.
    pub fn find_all(&self, text: &str, policy: MatchPolicy) -> Vec<TermMatch> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let len = self.scan_at(&chars, i, policy);
            if len == 0 {
                i += 1;
                continue;
            }
            let term: String = chars[i..i + len].iter().collect();
            debug!("Matched {} at [{}, {}).", loggable_term(&term), i, i + len);
            matches.push(TermMatch {
                term,
                start: i,
                end: i + len,
            });
            i += len;
        }
        matches
    }

    /// Replaces matched terms with `replacement` repeated to each term's
    /// character length, returning `text` unchanged when nothing matches.
    ///
    /// Replacement is textual: every literal occurrence of each distinct
    /// matched substring is overwritten, including occurrences outside any
    /// detected span.
    pub fn redact(&self, text: &str, replacement: char, policy: MatchPolicy) -> String {
        let matches = self.find_all(text, policy);
        if matches.is_empty() {
            return text.to_owned();
        }

        let mut distinct: Vec<&str> = Vec::new();
        for m in &matches {
            if !distinct.contains(&m.term.as_str()) {
                distinct.push(&m.term);
            }
        }

        let mut result = text.to_owned();
        for term in distinct {
            let mask: String = std::iter::repeat(replacement)
                .take(term.chars().count())
                .collect();
            result = result.replace(term, &mask);
        }
        result
    }
}
