// File: recordshield-core/src/redactors.rs
//! Format-preserving redaction transforms.
//!
//! Every transform is a pure function of a single value. The output keeps enough of the
//! original shape (leading digits, domains, first letters) to stay recognisable as "a
//! redacted X" while the sensitive payload is replaced with the mask character `X`.
//!
//! All transforms work on characters rather than bytes so that arbitrary UTF-8 input is
//! handled without panicking. Malformed shapes fall back to a fixed default instead of
//! failing.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// The placeholder character used by every transform.
pub const MASK_CHAR: char = 'X';

/// Signature shared by every field transform.
pub type Redactor = fn(&str) -> String;

/// Four or more decimal digits (Unicode `Nd`) and nothing else.
static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4,}$").unwrap());

fn mask(len: usize) -> String {
    std::iter::repeat(MASK_CHAR).take(len).collect()
}

fn head(value: &str, n: usize) -> String {
    value.chars().take(n).collect()
}

fn tail_from(value: &str, index: usize) -> String {
    value.chars().skip(index).collect()
}

/// Keeps the first two characters of a username, masking the rest.
fn redact_username(username: &str) -> String {
    let len = username.chars().count();
    if len > 2 {
        format!("{}{}", head(username, 2), mask(len - 2))
    } else {
        mask(len)
    }
}

/// Shared shape for `user@domain` values. Exactly one `@` is required.
fn redact_handle(value: &str) -> String {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(username), Some(domain), None) => format!("{}@{}", redact_username(username), domain),
        _ => mask(value.chars().count()),
    }
}

/// `9876543210` -> `98XXXXXX10`.
pub fn redact_phone(phone: &str) -> String {
    format!("{}{}{}", head(phone, 2), mask(6), tail_from(phone, 8))
}

/// `123456789012` -> `1234XXXX9012`.
pub fn redact_aadhar(aadhar: &str) -> String {
    format!("{}{}{}", head(aadhar, 4), mask(4), tail_from(aadhar, 8))
}

/// `A1234567` -> `AXXXXXX7`. Values of seven characters or fewer become `XXXXXXXX`.
pub fn redact_passport(passport: &str) -> String {
    let chars: Vec<char> = passport.chars().collect();
    if chars.len() > 7 {
        format!("{}{}{}", chars[0], mask(6), chars[7])
    } else {
        mask(8)
    }
}

/// `rajesh@okbank` -> `raXXXX@okbank`.
pub fn redact_upi_id(upi: &str) -> String {
    redact_handle(upi)
}

/// `John Smith` -> `JXXX SXXXX`. A single-part name is returned unchanged.
pub fn redact_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return name.to_string();
    }
    parts
        .iter()
        .map(|part| {
            let len = part.chars().count();
            if len > 1 {
                format!("{}{}", head(part, 1), mask(len - 1))
            } else {
                mask(1)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `john.smith@example.com` -> `joXXXXXXXX@example.com`.
pub fn redact_email(email: &str) -> String {
    redact_handle(email)
}

/// Masks numeric tokens of four or more characters (house numbers, postal codes).
pub fn redact_address(address: &str) -> String {
    address
        .split_whitespace()
        .map(|word| {
            if NUMERIC_TOKEN.is_match(word) {
                mask(word.chars().count())
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `ABCD1234` -> `ABXXXX34`. Values of four characters or fewer are fully masked.
pub fn redact_device_id(device_id: &str) -> String {
    let chars: Vec<char> = device_id.chars().collect();
    let len = chars.len();
    if len > 4 {
        let first: String = chars[..2].iter().collect();
        let last: String = chars[len - 2..].iter().collect();
        format!("{}{}{}", first, mask(len - 4), last)
    } else {
        mask(len)
    }
}

/// `10.0.0.5` -> `10.0.XXX.XXX`. Anything that is not four dot-separated parts becomes
/// `XXX.XXX.XXX.XXX`.
pub fn redact_ip_address(ip_address: &str) -> String {
    let parts: Vec<&str> = ip_address.split('.').collect();
    if parts.len() == 4 {
        format!("{}.{}.XXX.XXX", parts[0], parts[1])
    } else {
        "XXX.XXX.XXX.XXX".to_string()
    }
}

/// Applies `redactor` to an arbitrary JSON value.
///
/// Strings are masked directly. Numbers are coerced to their JSON text first, so a numeric
/// device id or postal code is masked like its string form (the result is a string).
/// Booleans, null, arrays and objects carry no maskable text and pass through unchanged.
pub fn redact_value(redactor: Redactor, value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(redactor(s)),
        Value::Number(n) => Value::String(redactor(&n.to_string())),
        other => other.clone(),
    }
}
