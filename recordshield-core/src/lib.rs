// recordshield-core/src/lib.rs
//! # RecordShield Core Library
//!
//! `recordshield-core` provides the platform-independent logic for classifying structured
//! records as containing Personally Identifiable Information (PII) and for producing a
//! redacted copy of each record that keeps its shape while masking sensitive content.
//!
//! The library is pure and stateless: a record document goes in, a verdict and a
//! redacted document come out. Reading and writing tables is left to the caller.
//!
//! ## Modules
//!
//! * `taxonomy`: The fixed field taxonomy as lookup tables of matchers and redactors.
//! * `validators`: Prefix patterns for the standalone PII fields.
//! * `redactors`: Format-preserving masking transforms, one per field.
//! * `engine`: Defines the `DetectionEngine` trait and `DetectionOutcome`.
//! * `engines`: Contains concrete implementations of the `DetectionEngine` trait.
//! * `redaction_match`: Audit records for masked fields and PII-safe debug logging.
//! * `encoding`: Decoding and encoding of embedded record text.
//! * `headless`: Text-in, text-out detection with malformed-input passthrough.
//! * `batch`: Order-preserving (optionally parallel) processing of many rows.
//! * `config`: Processing settings loaded from YAML.
//!
//! ## Detection rules
//!
//! A record is PII when either
//!
//! * a **standalone** field (`phone`, `aadhar`, `passport`, `upi_id`) holds a string value
//!   whose beginning matches the field's pattern, or
//! * at least two **combinatorial** fields (`name`, `email`, `address`, `device_id`,
//!   `ip_address`) are present, whatever their values.
//!
//! Standalone matches are masked first; when the combinatorial threshold is met, every
//! combinatorial field present is then masked over that partially redacted copy.
//!
//! ## Usage Example
//!
//! ```rust
//! use recordshield_core::{detect_pii, parse_document};
//!
//! let document = parse_document(r#"{"phone": "9876543210", "city": "Pune"}"#, true).unwrap();
//! let (is_pii, redacted) = detect_pii(&document);
//!
//! assert!(is_pii);
//! assert_eq!(redacted["phone"], "98XXXXXX10");
//! assert_eq!(redacted["city"], "Pune");
//! ```
//!
//! ## Error Handling
//!
//! Detection itself cannot fail. Fallible operations (configuration loading, encoding)
//! return `ShieldError` or `anyhow::Error`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod config;
pub mod encoding;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod redactors;
pub mod taxonomy;
pub mod validators;

/// Re-exports the processing configuration types.
pub use config::{merge_config, ColumnConfig, ProcessingConfig, ProcessingOverrides, VerdictStyle};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ShieldError;

/// Re-exports the engine trait and its data types.
pub use engine::{DetectionEngine, DetectionOutcome, RecordDocument};

/// Re-exports the concrete engine and the one-shot entry point.
pub use engines::record_engine::{detect_pii, RecordEngine};

/// Re-exports the field taxonomy.
pub use taxonomy::{CombinatorialRule, FieldKind, Matcher, StandaloneRule, Taxonomy, COMBINATORIAL_THRESHOLD};

/// Re-exports audit records for masked fields.
pub use redaction_match::{redact_sensitive, FieldRedaction};

/// Re-exports text-level and batch processing.
pub use encoding::{encode_document, parse_document};
pub use headless::{detect_text, TextOutcome};
pub use batch::{process_batch, BatchReport, BatchSummary};
