//! taxonomy.rs - The fixed PII field taxonomy as a lookup table.
//!
//! Field names map to a capability pair: a matcher (standalone fields only) and a
//! redactor. Dispatch in the engine goes through these tables rather than a chain of
//! conditionals, so the taxonomy can be extended without touching the detection logic.
//!
//! The builtin table is built once per process and shared by reference.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::ShieldError;
use crate::redactors::{self, Redactor};
use crate::validators;

/// Number of distinct combinatorial fields that must co-occur for a PII verdict.
pub const COMBINATORIAL_THRESHOLD: usize = 2;

/// Which detection branch a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A pattern-matched value alone is enough to mark the record as PII.
    Standalone,
    /// Only identifying in combination with another field from the same set.
    Combinatorial,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldKind::Standalone => write!(f, "standalone"),
            FieldKind::Combinatorial => write!(f, "combinatorial"),
        }
    }
}

/// Recognises a standalone field's value.
#[derive(Clone)]
pub enum Matcher {
    /// One of the builtin checks in `validators`, with the pattern it tests.
    Validator(validators::Validator, &'static str),
    /// A caller-supplied pattern.
    Pattern(Regex),
}

impl Matcher {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Matcher::Validator(check, _) => check(value),
            Matcher::Pattern(regex) => regex.is_match(value),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Validator(_, pattern) => pattern,
            Matcher::Pattern(regex) => regex.as_str(),
        }
    }
}

/// A field whose pattern-matched presence independently triggers a PII verdict.
#[derive(Clone)]
pub struct StandaloneRule {
    pub field: String,
    pub matcher: Matcher,
    pub redactor: Redactor,
}

impl StandaloneRule {
    /// Compiles `pattern` into a standalone rule for `field`.
    pub fn new(field: impl Into<String>, pattern: &str, redactor: Redactor) -> Result<Self, ShieldError> {
        let field = field.into();
        let regex = RegexBuilder::new(pattern)
            .size_limit(1 << 20)
            .build()
            .map_err(|e| ShieldError::PatternCompilation(field.clone(), e))?;
        Ok(Self { field, matcher: Matcher::Pattern(regex), redactor })
    }

    fn with_validator(
        field: &str,
        check: validators::Validator,
        pattern: &'static str,
        redactor: Redactor,
    ) -> Self {
        Self {
            field: field.to_string(),
            matcher: Matcher::Validator(check, pattern),
            redactor,
        }
    }

    /// Checks the value against the rule's pattern. The match is anchored at the start only.
    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    pub fn redact(&self, value: &str) -> String {
        (self.redactor)(value)
    }
}

impl fmt::Debug for StandaloneRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StandaloneRule")
            .field("field", &self.field)
            .field("pattern", &self.matcher.as_str())
            .finish()
    }
}

/// A field that only counts towards the combinatorial threshold.
#[derive(Clone)]
pub struct CombinatorialRule {
    pub field: String,
    pub redactor: Redactor,
}

impl CombinatorialRule {
    pub fn new(field: impl Into<String>, redactor: Redactor) -> Self {
        Self { field: field.into(), redactor }
    }
}

impl fmt::Debug for CombinatorialRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CombinatorialRule")
            .field("field", &self.field)
            .finish()
    }
}

/// Lookup tables for both detection branches.
///
/// A field name may appear at most once per set. The two sets are allowed to overlap;
/// the builtin taxonomy keeps them disjoint.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    standalone: Vec<StandaloneRule>,
    combinatorial: Vec<CombinatorialRule>,
    standalone_index: HashMap<String, usize>,
    combinatorial_index: HashMap<String, usize>,
}

static BUILTIN_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    let standalone = vec![
        StandaloneRule::with_validator("phone", validators::is_phone, validators::PHONE_PATTERN, redactors::redact_phone),
        StandaloneRule::with_validator("aadhar", validators::is_aadhar, validators::AADHAR_PATTERN, redactors::redact_aadhar),
        StandaloneRule::with_validator(
            "passport",
            validators::is_passport,
            validators::PASSPORT_PATTERN,
            redactors::redact_passport,
        ),
        StandaloneRule::with_validator("upi_id", validators::is_upi_id, validators::UPI_ID_PATTERN, redactors::redact_upi_id),
    ];
    let combinatorial = vec![
        CombinatorialRule::new("name", redactors::redact_name),
        CombinatorialRule::new("email", redactors::redact_email),
        CombinatorialRule::new("address", redactors::redact_address),
        CombinatorialRule::new("device_id", redactors::redact_device_id),
        CombinatorialRule::new("ip_address", redactors::redact_ip_address),
    ];
    Taxonomy::new(standalone, combinatorial).unwrap()
});

fn build_index<'a>(
    names: impl Iterator<Item = &'a str>,
    set: &'static str,
) -> Result<HashMap<String, usize>, ShieldError> {
    let mut index = HashMap::new();
    for (position, name) in names.enumerate() {
        if index.insert(name.to_string(), position).is_some() {
            return Err(ShieldError::DuplicateField(name.to_string(), set));
        }
    }
    Ok(index)
}

impl Taxonomy {
    /// Builds a taxonomy from explicit rule sets, rejecting duplicate names within a set.
    pub fn new(
        standalone: Vec<StandaloneRule>,
        combinatorial: Vec<CombinatorialRule>,
    ) -> Result<Self, ShieldError> {
        let standalone_index = build_index(standalone.iter().map(|r| r.field.as_str()), "standalone")?;
        let combinatorial_index =
            build_index(combinatorial.iter().map(|r| r.field.as_str()), "combinatorial")?;
        debug!(
            "Built taxonomy with {} standalone and {} combinatorial fields.",
            standalone.len(),
            combinatorial.len()
        );
        Ok(Self {
            standalone,
            combinatorial,
            standalone_index,
            combinatorial_index,
        })
    }

    /// The fixed taxonomy: `phone`, `aadhar`, `passport`, `upi_id` standalone;
    /// `name`, `email`, `address`, `device_id`, `ip_address` combinatorial.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN_TAXONOMY
    }

    pub fn standalone(&self, field: &str) -> Option<&StandaloneRule> {
        self.standalone_index.get(field).map(|&i| &self.standalone[i])
    }

    pub fn combinatorial(&self, field: &str) -> Option<&CombinatorialRule> {
        self.combinatorial_index.get(field).map(|&i| &self.combinatorial[i])
    }

    pub fn is_combinatorial(&self, field: &str) -> bool {
        self.combinatorial_index.contains_key(field)
    }

    /// Standalone field names in declaration order.
    pub fn standalone_fields(&self) -> impl Iterator<Item = &str> {
        self.standalone.iter().map(|r| r.field.as_str())
    }

    /// Combinatorial field names in declaration order.
    pub fn combinatorial_fields(&self) -> impl Iterator<Item = &str> {
        self.combinatorial.iter().map(|r| r.field.as_str())
    }

    pub fn combinatorial_threshold(&self) -> usize {
        COMBINATORIAL_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_are_fixed() {
        let taxonomy = Taxonomy::builtin();
        let standalone: Vec<&str> = taxonomy.standalone_fields().collect();
        let combinatorial: Vec<&str> = taxonomy.combinatorial_fields().collect();
        assert_eq!(standalone, ["phone", "aadhar", "passport", "upi_id"]);
        assert_eq!(combinatorial, ["name", "email", "address", "device_id", "ip_address"]);
        assert_eq!(taxonomy.combinatorial_threshold(), 2);
    }

    #[test]
    fn builtin_sets_are_disjoint() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.standalone_fields().all(|f| !taxonomy.is_combinatorial(f)));
    }

    #[test]
    fn lookup_dispatches_to_the_right_capabilities() {
        let taxonomy = Taxonomy::builtin();
        let phone = taxonomy.standalone("phone").unwrap();
        assert!(phone.matches("9876543210"));
        assert_eq!(phone.redact("9876543210"), "98XXXXXX10");

        let ip = taxonomy.combinatorial("ip_address").unwrap();
        assert_eq!((ip.redactor)("10.0.0.5"), "10.0.XXX.XXX");

        assert!(taxonomy.standalone("name").is_none());
        assert!(taxonomy.combinatorial("city").is_none());
    }

    #[test]
    fn builtin_matchers_are_the_field_validators() {
        let taxonomy = Taxonomy::builtin();
        let cases: [(&str, validators::Validator, &str, &str); 4] = [
            ("phone", validators::is_phone, validators::PHONE_PATTERN, "9876543210 (home)"),
            ("aadhar", validators::is_aadhar, validators::AADHAR_PATTERN, "123456789012"),
            ("passport", validators::is_passport, validators::PASSPORT_PATTERN, "A1234567"),
            ("upi_id", validators::is_upi_id, validators::UPI_ID_PATTERN, "user@okbank"),
        ];
        for (field, check, pattern, sample) in cases {
            let rule = taxonomy.standalone(field).unwrap();
            assert_eq!(rule.matcher.as_str(), pattern);
            assert!(matches!(rule.matcher, Matcher::Validator(..)));
            assert_eq!(rule.matches(sample), check(sample));
            assert!(rule.matches(sample), "{} should match {}", field, sample);
            assert!(!rule.matches("no match"));
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = Taxonomy::new(
            vec![],
            vec![
                CombinatorialRule::new("name", redactors::redact_name),
                CombinatorialRule::new("name", redactors::redact_email),
            ],
        );
        assert!(matches!(result, Err(ShieldError::DuplicateField(ref f, "combinatorial")) if f == "name"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let result = StandaloneRule::new("broken", r"^(\d{3}", redactors::redact_phone);
        assert!(matches!(result, Err(ShieldError::PatternCompilation(ref f, _)) if f == "broken"));
    }

    #[test]
    fn overlapping_sets_are_allowed() {
        let taxonomy = Taxonomy::new(
            vec![StandaloneRule::new("email", validators::UPI_ID_PATTERN, redactors::redact_upi_id).unwrap()],
            vec![CombinatorialRule::new("email", redactors::redact_email)],
        )
        .unwrap();
        assert!(taxonomy.standalone("email").is_some());
        assert!(taxonomy.is_combinatorial("email"));
    }
}
