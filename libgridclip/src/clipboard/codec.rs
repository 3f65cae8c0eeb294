use itertools::Itertools;

use super::model::{CellValue, TabularGrid};

/// Decodes clipboard text into rows of cells: line breaks separate rows,
/// horizontal tabs separate cells.
///
/// Returns `None` when the text holds no usable tabular data: zero rows, or
/// exactly one row with fewer than two cells. The minimum guards against a
/// single-value paste being mistaken for a full table. `None` is a signal,
/// not an error; callers fall through to the platform's native paste.
///
/// Quoting applied by [`encode_delimited`] is not reversed here; a cell
/// pasted with embedded quoting stays quoted, exactly as a spreadsheet
/// would deliver it.
#[must_use]
pub fn decode(text: &str) -> Option<TabularGrid> {
    let rows: TabularGrid = text
        .lines()
        .map(|line| line.split('\t').map(CellValue::text).collect())
        .collect();

    if rows.is_empty() || (rows.len() == 1 && rows[0].len() < 2) {
        return None;
    }

    Some(rows)
}

/// Identity formatter: passes the row/column structure through unchanged,
/// for in-process consumers that want structured data rather than text.
#[must_use]
pub fn encode_raw(grid: TabularGrid) -> TabularGrid {
    grid
}

/// Serializes a grid to the clipboard wire format: cells joined with tabs,
/// rows joined with newlines.
///
/// Cells are stringified (absent cells become the empty string). A cell
/// containing a carriage return or line feed is wrapped in double quotes
/// with embedded quotes doubled, so multi-line content survives the
/// newline row delimiter. Cells without line breaks are emitted verbatim.
#[must_use]
pub fn encode_delimited(grid: &TabularGrid) -> String {
    grid.iter()
        .map(|row| row.iter().map(encode_cell).join("\t"))
        .join("\n")
}

fn encode_cell(cell: &CellValue) -> String {
    let text = cell.to_text();
    if text.contains(['\r', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
