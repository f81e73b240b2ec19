//! batch.rs - Row-level batch processing.
//!
//! Rows are independent, so a batch is a plain map over them. With `parallel` enabled
//! the map runs on the rayon thread pool; results are always returned in input order.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ProcessingConfig;
use crate::engine::DetectionEngine;
use crate::errors::ShieldError;
use crate::headless::{detect_text, TextOutcome};

/// Aggregate counters over a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_rows: usize,
    pub pii_rows: usize,
    pub malformed_rows: usize,
    /// Number of masking actions per field name.
    pub field_counts: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &TextOutcome) {
        self.total_rows += 1;
        if outcome.is_pii {
            self.pii_rows += 1;
        }
        if !outcome.parsed {
            self.malformed_rows += 1;
        }
        for redaction in &outcome.redactions {
            *self.field_counts.entry(redaction.field.clone()).or_default() += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// One outcome per input row, in input order.
    pub outcomes: Vec<TextOutcome>,
    pub summary: BatchSummary,
}

/// Runs headless detection over every row.
pub fn process_batch<S>(
    engine: &dyn DetectionEngine,
    rows: &[S],
    config: &ProcessingConfig,
) -> Result<BatchReport, ShieldError>
where
    S: AsRef<str> + Sync,
{
    info!(
        "Processing {} rows ({}).",
        rows.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let outcomes: Vec<TextOutcome> = if config.parallel {
        rows.par_iter()
            .map(|raw| detect_text(engine, raw.as_ref(), config))
            .collect::<Result<_, _>>()?
    } else {
        rows.iter()
            .map(|raw| detect_text(engine, raw.as_ref(), config))
            .collect::<Result<_, _>>()?
    };

    let mut summary = BatchSummary::default();
    for outcome in &outcomes {
        summary.record(outcome);
    }
    info!(
        "Batch complete: {} rows, {} with PII, {} malformed.",
        summary.total_rows, summary.pii_rows, summary.malformed_rows
    );

    Ok(BatchReport { outcomes, summary })
}
