// recordshield/src/commands/scan.rs
//! `scan` command: classify every row and report, without writing a redacted table.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use recordshield_core::{process_batch, BatchSummary, DetectionEngine, ProcessingConfig};

use crate::ui::redaction_summary;
use crate::ui::theme::ThemeMap;
use crate::utils::table::read_input_file;

/// Options for the `scan` command.
pub struct ScanOptions {
    pub input: PathBuf,
    pub json_stdout: bool,
    pub fail_over_threshold: Option<usize>,
    pub quiet: bool,
}

pub fn run_scan(
    engine: &dyn DetectionEngine,
    config: &ProcessingConfig,
    opts: &ScanOptions,
    theme_map: &ThemeMap,
) -> Result<BatchSummary> {
    info!("Starting scan operation.");
    let table = read_input_file(&opts.input, &config.columns)?;
    let report = process_batch(engine, &table.records, config).context("Detection failed")?;
    let summary = report.summary;

    if opts.json_stdout {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize scan summary")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    } else if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(&summary, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if summary.pii_rows > threshold {
            bail!(
                "Detected {} PII row(s), exceeding the threshold of {}.",
                summary.pii_rows,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(summary)
}
