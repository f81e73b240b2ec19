// recordshield-core/src/engines/record_engine.rs
//! A `DetectionEngine` implementation that classifies record documents through a
//! field taxonomy and masks every field that contributed to the verdict.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::debug;
use serde_json::Value;

use crate::engine::{DetectionEngine, DetectionOutcome, RecordDocument};
use crate::redaction_match::{log_field_match_debug, log_redaction_action_debug, FieldRedaction};
use crate::redactors::redact_value;
use crate::taxonomy::{FieldKind, Taxonomy};

#[derive(Debug, Clone)]
pub struct RecordEngine {
    taxonomy: Cow<'static, Taxonomy>,
}

impl Default for RecordEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEngine {
    /// An engine over the builtin taxonomy.
    pub fn new() -> Self {
        Self {
            taxonomy: Cow::Borrowed(Taxonomy::builtin()),
        }
    }

    /// An engine over a caller-supplied taxonomy.
    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy: Cow::Owned(taxonomy),
        }
    }

    /// Masks every standalone field whose string value matches its pattern.
    /// Returns whether any field matched.
    fn redact_standalone(
        &self,
        document: &RecordDocument,
        redacted: &mut RecordDocument,
        redactions: &mut Vec<FieldRedaction>,
    ) -> bool {
        let mut found = false;
        for (key, value) in document {
            let Value::String(original) = value else { continue };
            let Some(rule) = self.taxonomy.standalone(key) else { continue };
            if !rule.matches(original) {
                continue;
            }

            found = true;
            log_field_match_debug(module_path!(), key, FieldKind::Standalone, original);
            let masked = rule.redact(original);
            log_redaction_action_debug(module_path!(), key, original, &masked);
            redactions.push(FieldRedaction::new(key, FieldKind::Standalone, original, &masked));
            if let Some(slot) = redacted.get_mut(key) {
                *slot = Value::String(masked);
            }
        }
        found
    }

    /// Counts the combinatorial fields present, by key only.
    fn count_combinatorial(&self, document: &RecordDocument) -> usize {
        document
            .keys()
            .filter(|key| self.taxonomy.is_combinatorial(key))
            .count()
    }

    /// Masks every combinatorial field present, reading from the (possibly already
    /// standalone-redacted) output copy.
    fn redact_combinatorial(&self, redacted: &mut RecordDocument, redactions: &mut Vec<FieldRedaction>) {
        for (key, slot) in redacted.iter_mut() {
            let Some(rule) = self.taxonomy.combinatorial(key) else { continue };
            let masked = redact_value(rule.redactor, slot);
            if masked == *slot {
                continue;
            }

            let original = match &*slot {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if let Value::String(masked_text) = &masked {
                log_redaction_action_debug(module_path!(), key, &original, masked_text);
                redactions.push(FieldRedaction::new(key, FieldKind::Combinatorial, &original, masked_text));
            }
            *slot = masked;
        }
    }
}

impl DetectionEngine for RecordEngine {
    fn detect(&self, document: &RecordDocument) -> DetectionOutcome {
        let mut redacted = document.clone();
        let mut redactions = Vec::new();

        let standalone_pii_found = self.redact_standalone(document, &mut redacted, &mut redactions);

        let combinatorial_count = self.count_combinatorial(document);
        let combinatorial_pii_found = combinatorial_count >= self.taxonomy.combinatorial_threshold();

        if combinatorial_pii_found {
            self.redact_combinatorial(&mut redacted, &mut redactions);
        }

        let is_pii = standalone_pii_found || combinatorial_pii_found;
        debug!(
            "Record verdict: is_pii={} (standalone={}, combinatorial_fields={}, redactions={})",
            is_pii,
            standalone_pii_found,
            combinatorial_count,
            redactions.len()
        );

        DetectionOutcome {
            is_pii,
            standalone_pii_found,
            combinatorial_pii_found,
            combinatorial_count,
            redacted,
            redactions,
        }
    }

    fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }
}

/// Classifies `document` with the builtin taxonomy and returns `(is_pii, redacted_document)`.
pub fn detect_pii(document: &RecordDocument) -> (bool, RecordDocument) {
    let outcome = RecordEngine::new().detect(document);
    (outcome.is_pii, outcome.redacted)
}
