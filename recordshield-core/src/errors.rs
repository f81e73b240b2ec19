//! errors.rs - Custom error types for the recordshield-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `recordshield-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShieldError {
    #[error("Failed to compile pattern for field '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Field '{0}' is declared more than once in the {1} rule set")]
    DuplicateField(String, &'static str),

    #[error("Invalid processing configuration: {0}")]
    ConfigValidation(String),

    #[error("Failed to encode record document: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
