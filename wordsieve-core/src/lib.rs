// wordsieve-core/src/lib.rs
//! # WordSieve Core Library
//!
//! `wordsieve-core` provides the fundamental, platform-independent logic for
//! detecting, locating, and redacting occurrences of a fixed vocabulary of
//! sensitive terms inside arbitrary text, and for extracting the
//! sentence-level context window around detections.
//!
//! The library is designed to be pure and stateless: a vocabulary is
//! compiled once into an immutable trie-backed matcher, and every query is a
//! synchronous computation over that compiled state, with no I/O and no
//! mutation. Vocabulary loading and text acquisition live at the boundary
//! (config files, the CLI crate); the core only transforms strings.
//!
//! ## Modules
//!
//! * `config`: Defines `VocabularyConfig` for specifying terms, the noise
//!   set, and sentence delimiters.
//! * `trie`: The arena-backed prefix trie the matcher compiles into.
//! * `matcher`: The `TermMatcher` scan queries (single-origin scan,
//!   containment, extraction, redaction) and the `MatchPolicy` selection.
//! * `context`: The `ContextExtractor` sentence-window expansion.
//! * `term_match`: Match records, scan summaries, and term-safe logging
//!   helpers.
//! * `engine`: Defines the `ScanEngine` trait, enabling a modular design.
//! * `engines`: Concrete implementations of the `ScanEngine` trait.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//! * `errors`: The library's typed error enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordsieve_core::{ScanEngine, TrieEngine, VocabularyConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = VocabularyConfig::new(vec!["classified".to_string()]);
//!     let engine = TrieEngine::new(config)?;
//!
//!     assert!(engine.contains("this memo is classified."));
//!     assert_eq!(
//!         engine.redact("this memo is classified."),
//!         "this memo is **********."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Absence of matches is a normal result, never an error. Fallible
//! operations (config loading, engine construction over an invalid
//! vocabulary) use `anyhow::Error` at the boundary and the typed
//! [`WordsieveError`] underneath.
//!
//! ## Design Principles
//!
//! * **Compile once, query many:** the trie is built at construction and
//!   immutable afterwards; rebuilding is the only update path.
//! * **Pluggable:** the `ScanEngine` trait decouples callers from the
//!   matching implementation.
//! * **Shareable:** engines are `Send + Sync` with no interior mutability,
//!   so one instance serves concurrent read-only callers.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod context;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod matcher;
pub mod term_match;
pub mod trie;

/// Re-exports the vocabulary configuration type.
pub use config::VocabularyConfig;

/// Re-exports the context extraction types.
pub use context::{ContextExtractor, DEFAULT_SENTENCE_DELIMITERS};

/// Re-exports the engine trait and its options.
pub use engine::{ScanEngine, ScanOptions, DEFAULT_REPLACEMENT_CHAR};

/// Re-exports the concrete trie-backed engine.
pub use engines::trie_engine::TrieEngine;

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordsieveError;

/// Re-exports the one-shot convenience functions.
pub use headless::{headless_extract_context, headless_redact_string};

/// Re-exports the matcher, its policy enum, and the default noise set.
pub use matcher::{MatchPolicy, TermMatcher, DEFAULT_NOISE_CHARS};

/// Re-exports match records and summary helpers.
pub use term_match::{summarize_matches, ScanSummaryItem, TermMatch};

/// Re-exports the trie for callers that need direct construction checks.
pub use trie::Trie;
