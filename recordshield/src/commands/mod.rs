// recordshield/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod detect;
pub mod inspect;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;

use recordshield_core::ProcessingConfig;

use crate::cli::ProcessingArgs;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Loads the processing configuration (file or defaults) and applies CLI overrides.
pub fn resolve_config(args: &ProcessingArgs) -> Result<ProcessingConfig> {
    let mut config = match &args.config {
        Some(path) => ProcessingConfig::load_from_file(path)
            .with_context(|| format!("Failed to load processing config {}", path.display()))?,
        None => ProcessingConfig::load_default()?,
    };

    if args.sequential {
        config.parallel = false;
    }
    if args.no_quote_normalization {
        config.normalize_single_quotes = false;
    }
    debug!("Resolved processing config: {:?}", config);
    Ok(config)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}
