// recordshield/src/commands/detect.rs
//! `detect` command: classify every row of a CSV table and write the redacted table.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use recordshield_core::{process_batch, BatchSummary, DetectionEngine, ProcessingConfig};

use crate::commands::{info_msg, warn_msg};
use crate::ui::output_format;
use crate::ui::redaction_summary;
use crate::ui::theme::ThemeMap;
use crate::utils::table::{read_input_file, write_output_file};

/// Options for the `detect` command.
pub struct DetectOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub no_redaction_summary: bool,
    pub quiet: bool,
}

/// Reads the input table, runs the batch and writes the redacted table.
pub fn run_detect(
    engine: &dyn DetectionEngine,
    config: &ProcessingConfig,
    opts: &DetectOptions,
    theme_map: &ThemeMap,
) -> Result<BatchSummary> {
    info!("Starting detect operation.");
    let table = read_input_file(&opts.input, &config.columns)?;
    if !opts.quiet {
        info_msg(
            format!("Processing {} row(s) from {}", table.len(), opts.input.display()),
            theme_map,
        );
    }

    let report = process_batch(engine, &table.records, config).context("Detection failed")?;

    write_output_file(
        &opts.output,
        &config.columns,
        &table.record_ids,
        &report.outcomes,
        config.verdict_style,
    )?;

    if !opts.quiet {
        if report.summary.malformed_rows > 0 {
            warn_msg(
                format!(
                    "{} row(s) could not be decoded and were passed through unchanged.",
                    report.summary.malformed_rows
                ),
                theme_map,
            );
        }

        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        output_format::print_success_message(
            &mut writer,
            &format!("Processing complete. Output saved to {}", opts.output.display()),
            theme_map,
            supports_color,
        )?;
        writer.flush()?;

        if !opts.no_redaction_summary {
            let stderr_supports_color = io::stderr().is_terminal();
            redaction_summary::print_summary(&report.summary, &mut io::stderr(), theme_map, stderr_supports_color)?;
        }
    }

    info!("Detect operation completed.");
    Ok(report.summary)
}
