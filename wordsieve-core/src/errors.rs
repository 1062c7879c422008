//! errors.rs - Custom error types for the wordsieve-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordsieve-core`
/// library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added in
/// future versions, so they cannot match exhaustively and break on upgrade.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordsieveError {
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
