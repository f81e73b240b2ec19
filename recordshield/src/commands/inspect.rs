// recordshield/src/commands/inspect.rs
//! `inspect` command: classify one record document.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Read, Write};

use recordshield_core::{detect_text, DetectionEngine, ProcessingConfig, TextOutcome};

use crate::commands::warn_msg;
use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Options for the `inspect` command.
pub struct InspectOptions {
    /// The record text; stdin is read when `None`.
    pub document: Option<String>,
    pub normalize_single_quotes: bool,
    pub quiet: bool,
}

pub fn run_inspect(engine: &dyn DetectionEngine, opts: InspectOptions, theme_map: &ThemeMap) -> Result<TextOutcome> {
    let raw = match opts.document {
        Some(document) => document,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read record document from stdin")?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let config = ProcessingConfig {
        normalize_single_quotes: opts.normalize_single_quotes,
        parallel: false,
        ..ProcessingConfig::default()
    };
    let outcome = detect_text(engine, &raw, &config).context("Detection failed")?;

    {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", outcome.output)?;
        stdout.flush()?;
    }

    if !opts.quiet {
        if !outcome.parsed {
            warn_msg("Record could not be decoded; passed through unchanged.", theme_map);
        }
        let stderr_supports_color = io::stderr().is_terminal();
        let verdict = if outcome.is_pii { "is_pii: true" } else { "is_pii: false" };
        let entry = if outcome.is_pii { ThemeEntry::RedactedText } else { ThemeEntry::Success };
        eprintln!("{}", styled(verdict, entry, theme_map, stderr_supports_color));
        for redaction in &outcome.redactions {
            eprintln!("  {} ({}): {}", redaction.field, redaction.kind, redaction.redacted);
        }
    }

    Ok(outcome)
}
