// recordshield/src/main.rs
//! RecordShield entry point.
//!
//! Parses arguments, initialises logging and the theme, builds the detection engine
//! and dispatches to the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use recordshield::cli::{Cli, Commands};
use recordshield::commands::{self, detect, inspect, scan};
use recordshield::logger;
use recordshield::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use recordshield_core::RecordEngine;

fn run(cli: Cli, theme_map: &ThemeMap) -> Result<()> {
    let engine = RecordEngine::new();

    match cli.command {
        Commands::Detect(cmd) => {
            let config = commands::resolve_config(&cmd.processing)?;
            let opts = detect::DetectOptions {
                input: cmd.input,
                output: cmd.output,
                no_redaction_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            detect::run_detect(&engine, &config, &opts, theme_map)?;
        }
        Commands::Scan(cmd) => {
            let config = commands::resolve_config(&cmd.processing)?;
            let opts = scan::ScanOptions {
                input: cmd.input,
                json_stdout: cmd.json_stdout,
                fail_over_threshold: cmd.fail_over_threshold,
                quiet: cli.quiet,
            };
            scan::run_scan(&engine, &config, &opts, theme_map)?;
        }
        Commands::Inspect(cmd) => {
            let opts = inspect::InspectOptions {
                document: cmd.document,
                normalize_single_quotes: !cmd.no_quote_normalization,
                quiet: cli.quiet,
            };
            inspect::run_inspect(&engine, opts, theme_map)?;
        }
    }
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let theme_map = match build_theme_map(cli.theme.as_ref()).context("Theme error") {
        Ok(map) => map,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::error_msg(format!("{:#}", e), &fallback);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &theme_map) {
        commands::error_msg(format!("{:#}", e), &theme_map);
        std::process::exit(1);
    }
}
