//! encoding.rs - Decoding and encoding of embedded record documents.
//!
//! Records arrive as JSON text embedded in a table cell. Producers of that text commonly
//! emit single-quoted pseudo-JSON, so decoding optionally rewrites every `'` to `"` before
//! parsing. Anything that does not decode to a JSON object is treated as malformed.
//!
//! Encoding writes the compact-but-spaced style (`{"a": 1, "b": [1, 2]}`) with all
//! non-ASCII characters escaped, matching what downstream consumers of the output table
//! already parse.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::io;

use log::debug;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::engine::RecordDocument;
use crate::errors::ShieldError;

/// JSON formatter with `", "` / `": "` separators and ASCII-only string output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Decodes embedded record text. Returns `None` for anything that is not a JSON object.
pub fn parse_document(raw: &str, normalize_single_quotes: bool) -> Option<RecordDocument> {
    let text: Cow<str> = if normalize_single_quotes && raw.contains('\'') {
        Cow::Owned(raw.replace('\'', "\""))
    } else {
        Cow::Borrowed(raw)
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(document)) => Some(document),
        Ok(other) => {
            debug!("Embedded record is valid JSON but not an object (found {}).", json_kind(&other));
            None
        }
        Err(e) => {
            debug!("Embedded record failed to decode: {}", e);
            None
        }
    }
}

/// Encodes a record document in the spaced, ASCII-escaped output style.
pub fn encode_document(document: &RecordDocument) -> Result<String, ShieldError> {
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|e| ShieldError::Fatal(format!("Encoded record is not valid UTF-8: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_double_quoted_objects() {
        let doc = parse_document(r#"{"phone": "9876543210", "n": 5}"#, false).unwrap();
        assert_eq!(doc["phone"], "9876543210");
        assert_eq!(doc["n"], 5);
    }

    #[test]
    fn single_quotes_are_normalized_when_enabled() {
        let raw = "{'name': 'Raj', 'city': 'Pune'}";
        assert!(parse_document(raw, false).is_none());
        let doc = parse_document(raw, true).unwrap();
        assert_eq!(doc["name"], "Raj");
    }

    #[test]
    fn apostrophes_inside_values_break_normalized_decoding() {
        assert!(parse_document(r#"{"name": "Sean O'Brien"}"#, true).is_none());
        assert!(parse_document(r#"{"name": "Sean O'Brien"}"#, false).is_some());
    }

    #[test]
    fn non_objects_are_malformed() {
        assert!(parse_document("[1, 2]", true).is_none());
        assert!(parse_document("\"text\"", true).is_none());
        assert!(parse_document("{broken", true).is_none());
        assert!(parse_document("", true).is_none());
    }

    #[test]
    fn encodes_with_spaced_separators_in_key_order() {
        let doc = parse_document(r#"{"b": 1, "a": [1, 2, {"x": null}], "c": true}"#, false).unwrap();
        assert_eq!(
            encode_document(&doc).unwrap(),
            r#"{"b": 1, "a": [1, 2, {"x": null}], "c": true}"#
        );
    }

    #[test]
    fn escapes_non_ascii() {
        let doc = parse_document(r#"{"name": "Zoë 😀", "q": "a\"b"}"#, false).unwrap();
        assert_eq!(
            encode_document(&doc).unwrap(),
            r#"{"name": "Zo\u00eb \ud83d\ude00", "q": "a\"b"}"#
        );
    }

    #[test]
    fn numbers_keep_their_exact_text() {
        let raw = r#"{"account": 123456789012345678901234567890, "ratio": 0.1, "neg": -7, "f": 1.0}"#;
        let doc = parse_document(raw, false).unwrap();
        assert_eq!(encode_document(&doc).unwrap(), raw);
    }

    #[test]
    fn empty_document() {
        let doc = parse_document("{}", false).unwrap();
        assert_eq!(encode_document(&doc).unwrap(), "{}");
    }
}
