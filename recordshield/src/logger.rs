// recordshield/src/logger.rs
//! Logging initialisation for the `recordshield` binary and its tests.
//!
//! Log output always goes to stderr so that stdout stays reserved for command output.
//! `RUST_LOG` is honoured unless an explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises the global logger. Calling it more than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
