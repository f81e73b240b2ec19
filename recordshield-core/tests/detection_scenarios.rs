// recordshield-core/tests/detection_scenarios.rs
//! End-to-end scenarios for the detection engine, exercised through the public API.

use anyhow::Result;
use serde_json::{json, Value};
use test_log::test;

use recordshield_core::{
    detect_pii, detect_text, DetectionEngine, ProcessingConfig, RecordDocument, RecordEngine, Taxonomy,
};

fn doc(value: Value) -> RecordDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

#[test]
fn phone_only_record() {
    let (is_pii, redacted) = detect_pii(&doc(json!({"phone": "9876543210"})));
    assert!(is_pii);
    assert_eq!(redacted, doc(json!({"phone": "98XXXXXX10"})));
}

#[test]
fn name_and_email_record() {
    let (is_pii, redacted) = detect_pii(&doc(json!({
        "name": "John Smith",
        "email": "john.smith@example.com"
    })));
    assert!(is_pii);
    assert_eq!(redacted["name"], json!("JXXX SXXXX"));
    assert_eq!(redacted["email"], json!("joXXXXXXXX@example.com"));
}

#[test]
fn single_name_record() {
    let input = doc(json!({"name": "Raj"}));
    let (is_pii, redacted) = detect_pii(&input);
    assert!(!is_pii);
    assert_eq!(redacted, input);
}

#[test]
fn passport_record() {
    let (is_pii, redacted) = detect_pii(&doc(json!({"passport": "A1234567"})));
    assert!(is_pii);
    assert_eq!(redacted["passport"], json!("AXXXXXX7"));
}

#[test]
fn ip_and_device_record() {
    let (is_pii, redacted) = detect_pii(&doc(json!({
        "ip_address": "10.0.0.5",
        "device_id": "ABCD1234"
    })));
    assert!(is_pii);
    assert_eq!(redacted["ip_address"], json!("10.0.XXX.XXX"));
    assert_eq!(redacted["device_id"], json!("ABXXXX34"));
}

#[test]
fn unrelated_record_is_untouched() {
    let input = doc(json!({"city": "Metropolis"}));
    let (is_pii, redacted) = detect_pii(&input);
    assert!(!is_pii);
    assert_eq!(redacted, input);
}

#[test]
fn single_name_under_combinatorial_branch_stays_unchanged() {
    let (is_pii, redacted) = detect_pii(&doc(json!({"name": "Raj", "address": "221 Baker Street 400001"})));
    assert!(is_pii);
    assert_eq!(redacted["name"], json!("Raj"));
    assert_eq!(redacted["address"], json!("221 Baker Street XXXXXX"));
}

#[test]
fn fixed_length_fields_keep_their_length() {
    let (_, redacted) = detect_pii(&doc(json!({
        "phone": "9876543210",
        "aadhar": "123456789012",
        "passport": "Z7654321",
        "device_id": "DEV-998877",
        "email": "someone@mail.org"
    })));
    for (field, original) in [
        ("phone", "9876543210"),
        ("aadhar", "123456789012"),
        ("passport", "Z7654321"),
        ("device_id", "DEV-998877"),
        ("email", "someone@mail.org"),
    ] {
        let masked = redacted[field].as_str().unwrap();
        assert_eq!(masked.chars().count(), original.chars().count(), "length changed for {}", field);
        assert_ne!(masked, original, "{} was not masked", field);
    }
}

#[test]
fn matching_phone_wins_regardless_of_other_fields() {
    let extras = [
        json!({}),
        json!({"name": "Raj"}),
        json!({"city": "Pune", "notes": null}),
        json!({"phone_alt": "123", "ip_address": 7}),
    ];
    for extra in extras {
        let mut input = doc(extra);
        input.insert("phone".to_string(), json!("9123456780"));
        let (is_pii, _) = detect_pii(&input);
        assert!(is_pii, "phone did not trigger for {:?}", input);
    }
}

#[test]
fn combinatorial_threshold_flips_on_second_field() {
    let taxonomy = Taxonomy::builtin();
    let fields: Vec<&str> = taxonomy.combinatorial_fields().collect();
    for first in &fields {
        let mut input = doc(json!({"city": "Pune"}));
        input.insert(first.to_string(), json!("value one"));
        assert!(!detect_pii(&input).0, "{} alone should not be PII", first);

        for second in fields.iter().filter(|f| *f != first) {
            let mut pair = input.clone();
            pair.insert(second.to_string(), json!("value two"));
            assert!(detect_pii(&pair).0, "{} + {} should be PII", first, second);
        }
    }
}

#[test]
fn fields_outside_taxonomy_are_never_altered() {
    let input = doc(json!({
        "phone": "9876543210",
        "name": "John Smith",
        "email": "john@x.io",
        "mobile": "9876543210",
        "pan": "ABCDE1234F",
        "nested": {"phone": "9876543210"},
        "list": ["10.0.0.5"],
        "score": 42
    }));
    let (_, redacted) = detect_pii(&input);
    for key in ["mobile", "pan", "nested", "list", "score"] {
        assert_eq!(redacted[key], input[key], "{} was altered", key);
    }
}

#[test]
fn detection_is_deterministic() {
    let engine = RecordEngine::new();
    let input = doc(json!({
        "name": "Priya Sharma",
        "address": "12 MG Road 560001",
        "upi_id": "priya@okaxis",
        "ip_address": "192.168.1.10"
    }));
    let first = engine.detect(&input);
    let second = engine.detect(&input);
    assert_eq!(first, second);
}

#[test]
fn text_pipeline_matches_document_pipeline() -> Result<()> {
    let engine = RecordEngine::new();
    let outcome = detect_text(
        &engine,
        "{'ip_address': '10.0.0.5', 'device_id': 'ABCD1234', 'city': 'Pune'}",
        &ProcessingConfig::default(),
    )?;
    assert!(outcome.is_pii);
    assert_eq!(
        outcome.output,
        r#"{"ip_address": "10.0.XXX.XXX", "device_id": "ABXXXX34", "city": "Pune"}"#
    );
    Ok(())
}
