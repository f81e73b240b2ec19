// recordshield-core/src/redaction_match.rs
//! Provides core data structures and utility functions for reporting field redactions
//! and for logging sensitive values safely within the `recordshield-core` library.

use serde::{Serialize, Deserialize};
use log::debug;

use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use hex;

use crate::taxonomy::FieldKind;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("RECORDSHIELD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single masked field of a record document.
///
/// The original value is never kept; `original_hash` lets callers correlate repeated
/// values across records without seeing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRedaction {
    pub field: String,
    pub kind: FieldKind,
    pub original_hash: String,
    pub redacted: String,
}

impl FieldRedaction {
    pub fn new(field: &str, kind: FieldKind, original: &str, redacted: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            original_hash: canonical_value_hash(field, original),
            redacted: redacted.to_string(),
        }
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.chars().count() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_field_match_debug(
    module_path: &str,
    field: &str,
    kind: FieldKind,
    original_sensitive_content: &str,
) {
    debug!("{} Matched {} field '{}' (original): '{}'",
        module_path,
        kind,
        field,
        get_loggable_content(original_sensitive_content)
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    field: &str,
    original_sensitive_content: &str,
    redacted_content: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for field '{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        redacted_content,
        field
    );
}

/// Stable hash of a field value, insensitive to case and surrounding/internal whitespace runs.
pub fn canonical_value_hash(field: &str, value: &str) -> String {
    let normalized = value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut hasher = Sha256::new();
    hasher.update(field.as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_canonical_value_hash_consistency() {
        let h1 = canonical_value_hash("email", "John.Smith@Example.COM ");
        let h2 = canonical_value_hash("email", "john.smith@example.com");
        assert_eq!(h1, h2);
        assert_ne!(h1, canonical_value_hash("upi_id", "john.smith@example.com"));
    }

    #[test]
    fn field_redaction_never_stores_original() {
        let r = FieldRedaction::new("phone", FieldKind::Standalone, "9876543210", "98XXXXXX10");
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("9876543210"));
        assert!(json.contains("\"kind\":\"standalone\""));
        assert_eq!(r.original_hash.len(), 64);
    }
}
