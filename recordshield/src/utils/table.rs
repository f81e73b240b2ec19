// recordshield/src/utils/table.rs
//! CSV input and output for record tables.
//!
//! The input table must contain the record id column and the data column named in the
//! processing configuration; other columns are ignored. The output table has exactly
//! three columns: record id, redacted data, verdict.

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::io::{Read, Write};
use std::path::Path;

use recordshield_core::{ColumnConfig, TextOutcome, VerdictStyle};

/// The columns of interest from an input table, row-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    pub record_ids: Vec<String>,
    pub records: Vec<String>,
}

impl InputTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("Input table is missing the required column '{}'", name))
}

/// Reads the record id and data columns from CSV text.
///
/// Rows with a different number of fields than the header are kept; a missing cell reads
/// as empty, which the detection stage treats as a malformed record.
pub fn read_input<R: Read>(reader: R, columns: &ColumnConfig) -> Result<InputTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let id_index = column_index(&headers, &columns.record_id)?;
    let data_index = column_index(&headers, &columns.data)?;
    debug!(
        "Located columns '{}' (#{}) and '{}' (#{}).",
        columns.record_id, id_index, columns.data, data_index
    );

    let mut table = InputTable::default();
    for (row, result) in reader.records().enumerate() {
        // Header is line 1.
        let record = result.with_context(|| format!("Failed to read CSV line {}", row + 2))?;
        if record.len() != headers.len() {
            warn!(
                "CSV line {} has {} field(s), expected {}.",
                row + 2,
                record.len(),
                headers.len()
            );
        }
        table.record_ids.push(record.get(id_index).unwrap_or_default().to_string());
        table.records.push(record.get(data_index).unwrap_or_default().to_string());
    }
    Ok(table)
}

pub fn read_input_file(path: &Path, columns: &ColumnConfig) -> Result<InputTable> {
    info!("Reading input table from: {}", path.display());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let table = read_input(file, columns)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;
    info!("Read {} rows.", table.len());
    Ok(table)
}

/// Writes the output table. `record_ids` and `outcomes` must be row-aligned.
pub fn write_output<W: Write>(
    writer: W,
    columns: &ColumnConfig,
    record_ids: &[String],
    outcomes: &[TextOutcome],
    verdict_style: VerdictStyle,
) -> Result<()> {
    if record_ids.len() != outcomes.len() {
        return Err(anyhow!(
            "Row count mismatch: {} record ids but {} outcomes",
            record_ids.len(),
            outcomes.len()
        ));
    }

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([&columns.record_id, &columns.redacted_data, &columns.verdict])?;
    for (record_id, outcome) in record_ids.iter().zip(outcomes) {
        writer.write_record([
            record_id.as_str(),
            outcome.output.as_str(),
            verdict_style.render(outcome.is_pii),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_output_file(
    path: &Path,
    columns: &ColumnConfig,
    record_ids: &[String],
    outcomes: &[TextOutcome],
    verdict_style: VerdictStyle,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    write_output(file, columns, record_ids, outcomes, verdict_style)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(output: &str, is_pii: bool) -> TextOutcome {
        TextOutcome {
            is_pii,
            output: output.to_string(),
            parsed: true,
            redactions: Vec::new(),
        }
    }

    #[test]
    fn reads_required_columns_in_any_position() {
        let csv_text = "data_json,other,record_id\n\"{\"\"phone\"\": \"\"9876543210\"\"}\",x,1\n\"{}\",y,2\n";
        let table = read_input(csv_text.as_bytes(), &ColumnConfig::default()).unwrap();
        assert_eq!(table.record_ids, ["1", "2"]);
        assert_eq!(table.records, [r#"{"phone": "9876543210"}"#, "{}"]);
    }

    #[test]
    fn ragged_rows_do_not_abort_the_table() {
        let csv_text = "record_id,data_json\n1,{}\n2\n3,{},extra\n";
        let table = read_input(csv_text.as_bytes(), &ColumnConfig::default()).unwrap();
        assert_eq!(table.record_ids, ["1", "2", "3"]);
        assert_eq!(table.records, ["{}", "", "{}"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv_text = "id,data_json\n1,{}\n";
        let err = read_input(csv_text.as_bytes(), &ColumnConfig::default()).unwrap_err();
        assert!(err.to_string().contains("'record_id'"));
    }

    #[test]
    fn writes_three_columns_quoting_only_when_needed() {
        let mut out = Vec::new();
        write_output(
            &mut out,
            &ColumnConfig::default(),
            &["7".to_string(), "8".to_string()],
            &[outcome(r#"{"phone": "98XXXXXX10"}"#, true), outcome("broken", false)],
            VerdictStyle::Python,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "record_id,redacted_data_json,is_pii\n7,\"{\"\"phone\"\": \"\"98XXXXXX10\"\"}\",True\n8,broken,False\n"
        );
    }

    #[test]
    fn misaligned_rows_are_rejected() {
        let result = write_output(
            Vec::new(),
            &ColumnConfig::default(),
            &["1".to_string()],
            &[],
            VerdictStyle::Lowercase,
        );
        assert!(result.is_err());
    }
}
