// recordshield-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running the detection engine on raw embedded-record text.
//!
//! The engine itself only sees decoded record documents. This layer decodes the text,
//! invokes the engine and re-encodes the redacted document. Text that cannot be decoded is
//! passed through unchanged with a `false` verdict, and the engine is not invoked for it.

use log::warn;

use crate::config::ProcessingConfig;
use crate::encoding::{encode_document, parse_document};
use crate::engine::DetectionEngine;
use crate::errors::ShieldError;
use crate::redaction_match::FieldRedaction;

/// The per-row result of headless detection.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOutcome {
    pub is_pii: bool,
    /// The re-encoded redacted document, or the original text if it could not be decoded.
    pub output: String,
    /// `false` when the text was malformed and passed through.
    pub parsed: bool,
    pub redactions: Vec<FieldRedaction>,
}

impl TextOutcome {
    fn passthrough(raw: &str) -> Self {
        Self {
            is_pii: false,
            output: raw.to_string(),
            parsed: false,
            redactions: Vec::new(),
        }
    }
}

/// Decodes `raw`, runs `engine` over it and encodes the redacted result.
///
/// # Arguments
///
/// * `engine` - Any `DetectionEngine`.
/// * `raw` - The embedded record text of one row.
/// * `config` - Decoding settings (single-quote normalization).
pub fn detect_text(
    engine: &dyn DetectionEngine,
    raw: &str,
    config: &ProcessingConfig,
) -> Result<TextOutcome, ShieldError> {
    let Some(document) = parse_document(raw, config.normalize_single_quotes) else {
        warn!("Malformed embedded record ({} chars); passing through unchanged.", raw.chars().count());
        return Ok(TextOutcome::passthrough(raw));
    };

    let outcome = engine.detect(&document);
    Ok(TextOutcome {
        is_pii: outcome.is_pii,
        output: encode_document(&outcome.redacted)?,
        parsed: true,
        redactions: outcome.redactions,
    })
}
