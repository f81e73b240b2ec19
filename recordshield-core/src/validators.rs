// File: recordshield-core/src/validators.rs
//! Pattern validation for the standalone PII fields.
//!
//! Each standalone field (`phone`, `aadhar`, `passport`, `upi_id`) is recognised by a
//! fixed regular expression. Patterns are anchored at the start of the value only: a value
//! that begins with a well-formed match is accepted even when trailing text follows it,
//! provided the trailing text does not extend the final word (e.g. `"9876543210 ext"`
//! matches, `"9876543210123"` does not).
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Ten digits, word-bounded: a national phone number.
pub const PHONE_PATTERN: &str = r"^\b\d{10}\b";
/// Twelve digits, word-bounded: a national ID (Aadhar) number.
pub const AADHAR_PATTERN: &str = r"^\b\d{12}\b";
/// One uppercase letter followed by seven digits.
pub const PASSPORT_PATTERN: &str = r"^\b[A-Z]\d{7}\b";
/// `local-part@domain` where both sides are word characters, dots or hyphens.
pub const UPI_ID_PATTERN: &str = r"^\b[\w.-]+@[\w.-]+\b";

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());
static AADHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(AADHAR_PATTERN).unwrap());
static PASSPORT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PASSPORT_PATTERN).unwrap());
static UPI_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(UPI_ID_PATTERN).unwrap());

/// A prefix check for one standalone field.
pub type Validator = fn(&str) -> bool;

/// Returns `true` if `value` starts with a ten-digit phone number.
pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Returns `true` if `value` starts with a twelve-digit Aadhar number.
pub fn is_aadhar(value: &str) -> bool {
    AADHAR_REGEX.is_match(value)
}

/// Returns `true` if `value` starts with a passport number (`A1234567`).
pub fn is_passport(value: &str) -> bool {
    PASSPORT_REGEX.is_match(value)
}

/// Returns `true` if `value` starts with a UPI handle (`user@bank`).
pub fn is_upi_id(value: &str) -> bool {
    UPI_ID_REGEX.is_match(value)
}
