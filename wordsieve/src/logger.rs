// wordsieve/src/logger.rs
//! Logger initialization for the wordsieve CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// Honors `RUST_LOG` unless an explicit level is supplied, in which case the
/// explicit level wins. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default());
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
