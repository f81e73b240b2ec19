// recordshield/src/ui/redaction_summary.rs
//! Renders a `BatchSummary` as a table of per-field redaction counts.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use recordshield_core::BatchSummary;

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn print_summary<W: Write>(
    summary: &BatchSummary,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled("Redaction Summary", ThemeEntry::Header, theme_map, supports_color))?;
    writeln!(
        writer,
        "Rows: {}  PII: {}  Malformed: {}",
        summary.total_rows, summary.pii_rows, summary.malformed_rows
    )?;

    if summary.field_counts.is_empty() {
        writeln!(writer, "No fields were redacted.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Redactions"]);
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let field_color = table_color(ThemeEntry::SummaryFieldName, theme_map, supports_color);
    let count_color = table_color(ThemeEntry::SummaryOccurrences, theme_map, supports_color);
    for (field, count) in &summary.field_counts {
        let mut field_cell = Cell::new(field);
        let mut count_cell = Cell::new(count).set_alignment(CellAlignment::Right);
        if let Some(color) = field_color {
            field_cell = field_cell.fg(color);
        }
        if let Some(color) = count_color {
            count_cell = count_cell.fg(color);
        }
        table.add_row(vec![field_cell, count_cell]);
    }
    writeln!(writer, "{}", table)
}

fn table_color(entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> Option<Color> {
    if !supports_color {
        return None;
    }
    theme_map
        .get(&entry)
        .and_then(|style| style.fg)
        .map(|color| color.to_table_color())
}
