//! Configuration management for `RecordShield-core`.
//!
//! This module defines the processing settings that surround the detection engine: the
//! names of the tabular columns, how embedded records are decoded, whether rows are
//! processed in parallel, and how verdicts are written. It handles YAML
//! (de)serialization and provides utilities for loading, merging, and validating configs.
//!
//! The PII field taxonomy itself is fixed and is deliberately not part of this file.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info};

use crate::errors::ShieldError;

/// Column names of the input and output tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Row identifier, copied to the output untouched.
    pub record_id: String,
    /// Input column holding the embedded record document.
    pub data: String,
    /// Output column receiving the redacted record document.
    pub redacted_data: String,
    /// Output column receiving the PII verdict.
    pub verdict: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            record_id: "record_id".to_string(),
            data: "data_json".to_string(),
            redacted_data: "redacted_data_json".to_string(),
            verdict: "is_pii".to_string(),
        }
    }
}

/// How boolean verdicts are rendered in the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStyle {
    /// `True` / `False`
    #[default]
    Python,
    /// `true` / `false`
    Lowercase,
}

impl VerdictStyle {
    pub fn render(&self, verdict: bool) -> &'static str {
        match (self, verdict) {
            (VerdictStyle::Python, true) => "True",
            (VerdictStyle::Python, false) => "False",
            (VerdictStyle::Lowercase, true) => "true",
            (VerdictStyle::Lowercase, false) => "false",
        }
    }
}

/// Represents the top-level processing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub columns: ColumnConfig,
    /// Rewrite `'` to `"` before decoding embedded records.
    pub normalize_single_quotes: bool,
    /// Process rows on the rayon thread pool.
    pub parallel: bool,
    pub verdict_style: VerdictStyle,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            normalize_single_quotes: true,
            parallel: true,
            verdict_style: VerdictStyle::default(),
        }
    }
}

/// A partially specified configuration, as read from a user file. Unset fields fall back
/// to the defaults during [`merge_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingOverrides {
    pub columns: ColumnOverrides,
    pub normalize_single_quotes: Option<bool>,
    pub parallel: Option<bool>,
    pub verdict_style: Option<VerdictStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnOverrides {
    pub record_id: Option<String>,
    pub data: Option<String>,
    pub redacted_data: Option<String>,
    pub verdict: Option<String>,
}

impl ProcessingConfig {
    /// Loads the built-in processing settings from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default processing config from embedded string...");
        let default_yaml = include_str!("../config/default_processing.yaml");
        let config: ProcessingConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default processing config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads user overrides from a YAML file and merges them over the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading processing config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let overrides: ProcessingOverrides = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let config = merge_config(Self::load_default()?, Some(overrides));
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Checks that every column name is set and that output columns cannot collide.
    pub fn validate(&self) -> Result<(), ShieldError> {
        let columns = &self.columns;
        let mut errors = Vec::new();

        for (label, value) in [
            ("record_id", &columns.record_id),
            ("data", &columns.data),
            ("redacted_data", &columns.redacted_data),
            ("verdict", &columns.verdict),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("column '{}' has an empty name.", label));
            }
        }

        let mut output_names = HashSet::new();
        for name in [&columns.record_id, &columns.redacted_data, &columns.verdict] {
            if !name.is_empty() && !output_names.insert(name.as_str()) {
                errors.push(format!("output column name '{}' is used more than once.", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShieldError::ConfigValidation(errors.join(" ")))
        }
    }
}

/// Merges user overrides with the default configuration.
pub fn merge_config(
    default_config: ProcessingConfig,
    user_config: Option<ProcessingOverrides>,
) -> ProcessingConfig {
    let mut merged = default_config;
    let Some(user) = user_config else {
        debug!("No user processing config provided; using defaults.");
        return merged;
    };

    if let Some(record_id) = user.columns.record_id {
        debug!("Overriding record id column with user value: {}", record_id);
        merged.columns.record_id = record_id;
    }
    if let Some(data) = user.columns.data {
        debug!("Overriding data column with user value: {}", data);
        merged.columns.data = data;
    }
    if let Some(redacted_data) = user.columns.redacted_data {
        debug!("Overriding redacted data column with user value: {}", redacted_data);
        merged.columns.redacted_data = redacted_data;
    }
    if let Some(verdict) = user.columns.verdict {
        debug!("Overriding verdict column with user value: {}", verdict);
        merged.columns.verdict = verdict;
    }
    if let Some(normalize) = user.normalize_single_quotes {
        merged.normalize_single_quotes = normalize;
    }
    if let Some(parallel) = user.parallel {
        merged.parallel = parallel;
    }
    if let Some(style) = user.verdict_style {
        merged.verdict_style = style;
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_code_defaults() {
        assert_eq!(ProcessingConfig::load_default().unwrap(), ProcessingConfig::default());
    }

    #[test]
    fn verdict_rendering() {
        assert_eq!(VerdictStyle::Python.render(true), "True");
        assert_eq!(VerdictStyle::Python.render(false), "False");
        assert_eq!(VerdictStyle::Lowercase.render(true), "true");
    }

    #[test]
    fn merge_without_user_config_is_identity() {
        let merged = merge_config(ProcessingConfig::default(), None);
        assert_eq!(merged, ProcessingConfig::default());
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let user = ProcessingOverrides {
            columns: ColumnOverrides {
                data: Some("payload".to_string()),
                ..Default::default()
            },
            parallel: Some(false),
            ..Default::default()
        };
        let merged = merge_config(ProcessingConfig::default(), Some(user));
        assert_eq!(merged.columns.data, "payload");
        assert_eq!(merged.columns.record_id, "record_id");
        assert!(!merged.parallel);
        assert!(merged.normalize_single_quotes);
    }

    #[test]
    fn validation_rejects_colliding_output_columns() {
        let mut config = ProcessingConfig::default();
        config.columns.verdict = "record_id".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'record_id' is used more than once"));
    }

    #[test]
    fn validation_rejects_empty_names() {
        let mut config = ProcessingConfig::default();
        config.columns.data = "  ".to_string();
        assert!(matches!(config.validate(), Err(ShieldError::ConfigValidation(_))));
    }
}
