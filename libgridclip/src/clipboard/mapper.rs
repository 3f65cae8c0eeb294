use super::model::{CellValue, ColumnDefinition, ColumnMap, RowRecord, TabularGrid};

/// Result of resolving a candidate header row against the grid's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResolution {
    /// Positional map from pasted columns to grid columns.
    pub map: ColumnMap,
    /// True when the first pasted row was recognized as a header and must
    /// be dropped from the data rows.
    pub header_consumed: bool,
}

/// Resolves the first decoded row against the grid's ordered column
/// definitions.
///
/// Matching runs in fixed priority order, first full match wins:
///
/// 1. Title match: every header cell must equal (trimmed) some column's
///    trimmed title. Succeeding confirms a header row, which is consumed.
/// 2. Field match: every non-blank header cell must equal (trimmed) some
///    column's trimmed field key; blank cells are vacuously matched and map
///    to no column. Succeeding also confirms and consumes the header row.
/// 3. Positional fallback: no header row is assumed; pasted column `i` maps
///    to the grid's `i`-th column and every decoded row is a data row.
///
/// Duplicate header text matches the first column found. A pasted column
/// with no grid counterpart maps to `None` and its values are dropped.
#[must_use]
pub fn resolve_columns(header: &[CellValue], columns: &[ColumnDefinition]) -> ColumnResolution {
    if let Some(map) = match_by_title(header, columns) {
        return ColumnResolution {
            map,
            header_consumed: true,
        };
    }

    if let Some(map) = match_by_field(header, columns) {
        return ColumnResolution {
            map,
            header_consumed: true,
        };
    }

    let map = header
        .iter()
        .enumerate()
        .map(|(i, _)| columns.get(i).cloned())
        .collect();

    ColumnResolution {
        map,
        header_consumed: false,
    }
}

/// Every cell, blank ones included, must match a column title.
fn match_by_title(header: &[CellValue], columns: &[ColumnDefinition]) -> Option<ColumnMap> {
    header
        .iter()
        .map(|cell| {
            let text = cell.to_text();
            columns
                .iter()
                .find(|column| column.title.trim() == text.trim())
                .cloned()
                .map(Some)
        })
        .collect()
}

/// Non-blank cells must match a column field; blank cells are skipped and
/// map to no column at all.
fn match_by_field(header: &[CellValue], columns: &[ColumnDefinition]) -> Option<ColumnMap> {
    header
        .iter()
        .map(|cell| {
            if cell.is_blank() {
                return Some(None);
            }
            let text = cell.to_text();
            columns
                .iter()
                .find(|column| column.field.trim() == text.trim())
                .cloned()
                .map(Some)
        })
        .collect()
}

/// Builds row records from decoded data rows and a resolved column map.
///
/// Cells whose map entry is `None`, and cells beyond the mapped column
/// count, are dropped; rows shorter than the map simply yield fewer fields.
#[must_use]
pub fn rows_to_records(rows: &[Vec<CellValue>], map: &ColumnMap) -> Vec<RowRecord> {
    rows.iter()
        .map(|row| {
            let mut record = RowRecord::new();
            for (i, cell) in row.iter().enumerate() {
                if let Some(Some(column)) = map.get(i) {
                    record.insert(column.field.clone(), cell.clone());
                }
            }
            record
        })
        .collect()
}

/// Full paste-side pipeline from a decoded grid to committable records:
/// resolve the header, drop it if consumed, and map the remaining rows.
#[must_use]
pub fn records_from_grid(grid: &TabularGrid, columns: &[ColumnDefinition]) -> Vec<RowRecord> {
    let Some(first) = grid.first() else {
        return Vec::new();
    };

    let resolution = resolve_columns(first, columns);
    let data_rows = if resolution.header_consumed {
        &grid[1..]
    } else {
        &grid[..]
    };

    rows_to_records(data_rows, &resolution.map)
}
