// wordsieve-core/src/engines/trie_engine.rs
//! A `ScanEngine` implementation backed by the vocabulary trie matcher.
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::debug;

use crate::config::VocabularyConfig;
use crate::context::ContextExtractor;
use crate::engine::{ScanEngine, ScanOptions};
use crate::matcher::TermMatcher;
use crate::term_match::{summarize_matches, ScanSummaryItem, TermMatch};

/// The standard engine: validates the vocabulary once, compiles the trie
/// matcher and context extractor, and answers queries from the compiled
/// state for its entire lifetime.
#[derive(Debug)]
pub struct TrieEngine {
    matcher: TermMatcher,
    extractor: ContextExtractor,
    config: VocabularyConfig,
    options: ScanOptions,
}

impl TrieEngine {
    pub fn new(config: VocabularyConfig) -> Result<Self> {
        Self::with_options(config, ScanOptions::default())
    }

    pub fn with_options(config: VocabularyConfig, options: ScanOptions) -> Result<Self> {
        config.validate()?;
        let matcher = TermMatcher::with_noise_chars(&config.terms, config.noise_chars());
        let extractor = ContextExtractor::new(config.sentence_delimiters());
        debug!("TrieEngine compiled over {} terms.", config.terms.len());

        Ok(Self {
            matcher,
            extractor,
            config,
            options,
        })
    }

    /// The compiled matcher, for callers that need single-origin scans.
    pub fn matcher(&self) -> &TermMatcher {
        &self.matcher
    }
}

impl ScanEngine for TrieEngine {
    fn contains(&self, content: &str) -> bool {
        self.matcher.contains(content, self.options.policy)
    }

    fn scan(&self, content: &str) -> Vec<TermMatch> {
        self.matcher.find_all(content, self.options.policy)
    }

    fn redact(&self, content: &str) -> String {
        self.matcher
            .redact(content, self.options.replacement_char, self.options.policy)
    }

    fn extract_context(&self, content: &str) -> Option<String> {
        let matches = self.scan(content);
        self.extractor.extract(content, &matches)
    }

    fn summarize(&self, content: &str) -> Vec<ScanSummaryItem> {
        summarize_matches(&self.scan(content))
    }

    fn vocabulary(&self) -> &VocabularyConfig {
        &self.config
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchPolicy;

    fn engine(terms: &[&str]) -> TrieEngine {
        let config = VocabularyConfig::new(terms.iter().map(|t| t.to_string()).collect());
        TrieEngine::new(config).unwrap()
    }

    #[test]
    fn test_engine_rejects_invalid_vocabulary() {
        let config = VocabularyConfig::new(vec![String::new()]);
        assert!(TrieEngine::new(config).is_err());
    }

    #[test]
    fn test_empty_vocabulary_is_valid_and_matches_nothing() {
        let e = engine(&[]);
        assert!(!e.contains("anything"));
        assert!(e.scan("anything").is_empty());
        assert_eq!(e.redact("anything"), "anything");
        assert_eq!(e.extract_context("anything"), None);
    }

    #[test]
    fn test_contains_and_scan() {
        let e = engine(&["cat"]);
        assert!(e.contains("the cat sat"));
        assert!(!e.contains("the dog sat"));

        let matches = e.scan("the cat sat");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].term, "cat");
        assert_eq!((matches[0].start, matches[0].end), (4, 7));
    }

    #[test]
    fn test_redact_uses_configured_replacement() {
        let config = VocabularyConfig::new(vec!["cat".to_string()]);
        let options = ScanOptions {
            policy: MatchPolicy::Shortest,
            replacement_char: '#',
        };
        let e = TrieEngine::with_options(config, options).unwrap();
        assert_eq!(e.redact("the cat sat"), "the ### sat");
    }

    #[test]
    fn test_policy_flows_through() {
        let config = VocabularyConfig::new(vec!["中国".to_string(), "中国人".to_string()]);
        let longest = TrieEngine::with_options(
            config.clone(),
            ScanOptions {
                policy: MatchPolicy::Longest,
                ..ScanOptions::default()
            },
        )
        .unwrap();
        assert_eq!(longest.scan("我是中国人")[0].term, "中国人");

        let shortest = TrieEngine::new(config).unwrap();
        assert_eq!(shortest.scan("我是中国人")[0].term, "中国");
    }

    #[test]
    fn test_extract_context_with_configured_delimiters() {
        let config = VocabularyConfig {
            terms: vec!["cat".to_string()],
            noise_chars: None,
            sentence_delimiters: Some(vec!['.', ';']),
        };
        let e = TrieEngine::new(config).unwrap();
        assert_eq!(e.extract_context("A.B cat C.D").as_deref(), Some("B cat C"));
        assert_eq!(e.extract_context("A.B dog C.D"), None);
    }

    #[test]
    fn test_summarize_counts_occurrences() {
        let e = engine(&["cat", "dog"]);
        let summary = e.summarize("cat dog cat");
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].term, "cat");
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[1].term, "dog");
        assert_eq!(summary[1].occurrences, 1);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrieEngine>();
    }
}
