// recordshield/src/cli.rs
//! This file defines the command-line interface (CLI) for the recordshield application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default file name for the redacted output table.
pub const DEFAULT_OUTPUT_FILE: &str = "redacted_output.csv";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "recordshield",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact PII in tabular records",
    long_about = "RecordShield reads a CSV file whose rows embed a JSON record document, decides for every row whether the record contains Personally Identifiable Information (PII), and writes a copy of the table in which each sensitive value is masked while keeping its shape.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `recordshield` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies every row of a CSV file and writes the redacted table.
    #[command(about = "Classifies every row of a CSV file and writes the redacted table.")]
    Detect(DetectCommand),

    /// Classifies every row of a CSV file and reports a summary without writing output.
    #[command(about = "Classifies every row of a CSV file and reports a summary without writing output.")]
    Scan(ScanCommand),

    /// Classifies a single record document from the command line or stdin.
    #[command(about = "Classifies a single record document from the command line or stdin.")]
    Inspect(InspectCommand),
}

/// Processing flags shared by `detect` and `scan`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProcessingArgs {
    /// Path to a processing configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a processing configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Process rows one at a time instead of in parallel.
    #[arg(long = "sequential", help = "Process rows one at a time instead of in parallel.")]
    pub sequential: bool,

    /// Decode embedded records as-is, without rewriting single quotes.
    #[arg(long = "no-quote-normalization", help = "Decode embedded records as-is, without rewriting single quotes to double quotes.")]
    pub no_quote_normalization: bool,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectCommand {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT", help = "Path to the input CSV file.")]
    pub input: PathBuf,

    /// Write the redacted table to this file.
    #[arg(long, short = 'o', value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE, help = "Write the redacted table to this file.")]
    pub output: PathBuf,

    #[command(flatten)]
    pub processing: ProcessingArgs,

    /// Suppress the redaction summary.
    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT", help = "Path to the input CSV file.")]
    pub input: PathBuf,

    #[command(flatten)]
    pub processing: ProcessingArgs,

    /// Print the summary as JSON to stdout.
    #[arg(long = "json-stdout", help = "Print the scan summary to stdout as JSON.")]
    pub json_stdout: bool,

    /// Exit with a non-zero code if the number of PII rows exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the number of PII rows exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// The record document; read from stdin when omitted.
    #[arg(long = "document", value_name = "JSON", help = "The record document to classify (reads stdin if not provided).")]
    pub document: Option<String>,

    /// Decode the record as-is, without rewriting single quotes.
    #[arg(long = "no-quote-normalization", help = "Decode the record as-is, without rewriting single quotes to double quotes.")]
    pub no_quote_normalization: bool,
}
