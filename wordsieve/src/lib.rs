// wordsieve/src/lib.rs
//! # WordSieve CLI Application
//!
//! This crate provides the command-line front end for the wordsieve-core
//! scanning engine: vocabulary loading, argument parsing, and the `scan`,
//! `redact`, and `context` subcommands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
