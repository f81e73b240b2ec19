// recordshield/src/lib.rs
//! # RecordShield CLI Application
//!
//! This crate provides the command-line interface for the RecordShield PII engine:
//! CSV table input/output, themed terminal messages and the redaction summary.

pub mod commands;
pub mod cli;
pub mod ui;
pub mod utils;
pub mod logger;

pub use commands::resolve_config;
