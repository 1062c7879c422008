// wordsieve/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordsieve
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordsieve_core::MatchPolicy;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordsieve",
    author = "WordSieve Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact sensitive vocabulary terms in text",
    long_about = "Wordsieve is a command-line utility for detecting, redacting, and \
contextualizing occurrences of a fixed vocabulary of sensitive terms in text-based data. \
The vocabulary is compiled once into a trie-backed matcher that tolerates interleaved \
noise characters, and every subcommand runs the same engine over a file or stdin.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a custom vocabulary file (YAML).
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to a custom vocabulary file (YAML); the embedded demo vocabulary is used when omitted."
    )]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordsieve` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans an input for vocabulary terms and lists every match with a summary, without redacting.
    #[command(about = "Scans an input for vocabulary terms and lists every match, without redacting.")]
    Scan(ScanCommand),

    /// Redacts matched terms in an input file or stdin.
    #[command(about = "Redacts matched terms in an input file or stdin.")]
    Redact(RedactCommand),

    /// Prints the sentence-level context window enclosing all matches.
    #[command(about = "Prints the sentence-level context window enclosing all matches.")]
    Context(ContextCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Emit matches as JSON instead of the human-readable listing.
    #[arg(long, help = "Emit matches as JSON instead of the human-readable listing.")]
    pub json: bool,

    /// Match policy applied when one vocabulary entry is a prefix of another.
    #[arg(long, value_enum, default_value = "shortest", help = "Match policy: stop at the shortest or seek the longest completion.")]
    pub policy: PolicyArg,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Character used to overwrite matched terms.
    #[arg(long = "replace-char", default_value = "*", help = "Character used to overwrite matched terms.")]
    pub replace_char: char,

    /// Match policy applied when one vocabulary entry is a prefix of another.
    #[arg(long, value_enum, default_value = "shortest", help = "Match policy: stop at the shortest or seek the longest completion.")]
    pub policy: PolicyArg,
}

/// Arguments for the `context` command.
#[derive(Parser, Debug)]
pub struct ContextCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Match policy applied when one vocabulary entry is a prefix of another.
    #[arg(long, value_enum, default_value = "shortest", help = "Match policy: stop at the shortest or seek the longest completion.")]
    pub policy: PolicyArg,
}

/// CLI-facing mirror of [`MatchPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Stop at the first complete vocabulary entry.
    Shortest,
    /// Keep scanning past the first complete entry for a longer one.
    Longest,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Shortest => MatchPolicy::Shortest,
            PolicyArg::Longest => MatchPolicy::Longest,
        }
    }
}
