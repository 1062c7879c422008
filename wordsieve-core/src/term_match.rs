// wordsieve-core/src/term_match.rs
//! Provides the match record types and term-safe logging helpers used
//! throughout the `wordsieve-core` library.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A static boolean that is initialized once to determine whether vocabulary
/// terms may appear verbatim in debug logs.
static TERM_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("WORDSIEVE_ALLOW_DEBUG_TERMS")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single detected vocabulary occurrence.
///
/// `start` and `end` are **character** (codepoint) indices into the scanned
/// text, forming the half-open span `[start, end)`. `term` is the matched
/// slice of the input, noise characters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    pub term: String,
    pub start: usize,
    pub end: usize,
}

impl TermMatch {
    /// Span length in characters, noise included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Per-term aggregation of one scan pass, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummaryItem {
    pub term: String,
    pub occurrences: usize,
}

/// Groups matches by matched text, preserving first-appearance order.
pub fn summarize_matches(matches: &[TermMatch]) -> Vec<ScanSummaryItem> {
    let mut items: Vec<ScanSummaryItem> = Vec::new();
    for m in matches {
        match items.iter_mut().find(|item| item.term == m.term) {
            Some(item) => item.occurrences += 1,
            None => items.push(ScanSummaryItem {
                term: m.term.clone(),
                occurrences: 1,
            }),
        }
    }
    items
}

/// Masks a sensitive term for log output.
pub fn mask_term(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[MASKED]".to_string()
    } else {
        format!("[MASKED: {} chars]", chars)
    }
}

/// Returns `s` verbatim when `WORDSIEVE_ALLOW_DEBUG_TERMS=true`, otherwise a
/// masked placeholder. Every debug log that would carry a vocabulary term or
/// matched text goes through this.
pub fn loggable_term(s: &str) -> String {
    if *TERM_DEBUG_ALLOWED {
        s.to_string()
    } else {
        mask_term(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_term_short_string() {
        assert_eq!(mask_term("abc"), "[MASKED]".to_string());
    }

    #[test]
    fn test_mask_term_long_string() {
        assert_eq!(mask_term("123456789"), "[MASKED: 9 chars]".to_string());
    }

    #[test]
    fn test_mask_term_counts_characters_not_bytes() {
        // Nine CJK codepoints, far more than nine bytes.
        assert_eq!(mask_term("一二三四五六七八九"), "[MASKED: 9 chars]".to_string());
    }

    #[test]
    fn test_span_len() {
        let m = TermMatch {
            term: "abc".to_string(),
            start: 4,
            end: 7,
        };
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_summarize_matches_groups_and_orders() {
        let matches = vec![
            TermMatch { term: "b".into(), start: 0, end: 2 },
            TermMatch { term: "a".into(), start: 3, end: 5 },
            TermMatch { term: "b".into(), start: 6, end: 8 },
        ];
        let summary = summarize_matches(&matches);
        assert_eq!(
            summary,
            vec![
                ScanSummaryItem { term: "b".into(), occurrences: 2 },
                ScanSummaryItem { term: "a".into(), occurrences: 1 },
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize_matches(&[]).is_empty());
    }
}
