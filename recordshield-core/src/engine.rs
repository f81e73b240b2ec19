// recordshield-core/src/engine.rs
//! Defines the core `DetectionEngine` trait and related data structures.
//!
//! The trait decouples callers (the headless wrapper, batch processing, the CLI) from
//! the concrete detection implementation, so an engine over a different taxonomy can be
//! swapped in without touching them.
//!
//! License: MIT OR APACHE 2.0

use serde_json::{Map, Value};

use crate::redaction_match::FieldRedaction;
use crate::taxonomy::Taxonomy;

/// One row's nested key-value payload. Key order is preserved.
pub type RecordDocument = Map<String, Value>;

/// The result of running detection over a single record document.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionOutcome {
    /// `standalone_pii_found || combinatorial_pii_found`.
    pub is_pii: bool,
    pub standalone_pii_found: bool,
    pub combinatorial_pii_found: bool,
    /// Number of combinatorial fields present in the document, regardless of value.
    pub combinatorial_count: usize,
    /// Same keys in the same order as the input; matched values masked.
    pub redacted: RecordDocument,
    /// One entry per masking action, in the order they were applied.
    pub redactions: Vec<FieldRedaction>,
}

/// A trait that defines the core functionality of a detection engine.
///
/// Implementations must be pure: the same document always yields the same outcome,
/// and the input document is never mutated.
pub trait DetectionEngine: Send + Sync {
    /// Classifies `document` and produces its redacted copy.
    fn detect(&self, document: &RecordDocument) -> DetectionOutcome;

    /// Returns the taxonomy the engine dispatches through.
    fn taxonomy(&self) -> &Taxonomy;
}
