use crate::clipboard::events::{CopyDispatcher, CopyEvent};
use crate::clipboard::model::{CellValue, ColumnDefinition, GridModel, RowRecord, TabularGrid};

/// In-memory grid double.
///
/// Row identity for `update_or_insert` is the value of the first column's
/// field, which is what the grids this subsystem targets key on by default.
pub(super) struct FakeGrid {
    pub columns: Vec<ColumnDefinition>,
    pub rows: Vec<RowRecord>,
    /// Indices of the currently visible rows; `None` means all rows.
    pub active: Option<Vec<usize>>,
    /// Indices of selected rows; `None` means the row-selection
    /// collaborator is absent.
    pub selected: Option<Vec<usize>>,
    pub editing: bool,
}

impl FakeGrid {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            active: None,
            selected: None,
            editing: false,
        }
    }

    pub fn push_row(&mut self, pairs: &[(&str, &str)]) {
        self.rows.push(record(pairs));
    }

    fn key_field(&self) -> Option<&str> {
        self.columns.first().map(|column| column.field.as_str())
    }

    fn rows_at(&self, indices: &[usize]) -> Vec<RowRecord> {
        indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect()
    }
}

impl GridModel for FakeGrid {
    fn columns(&self) -> Vec<ColumnDefinition> {
        self.columns.clone()
    }

    fn all_rows(&self) -> Vec<RowRecord> {
        self.rows.clone()
    }

    fn active_rows(&self) -> Vec<RowRecord> {
        match &self.active {
            Some(indices) => self.rows_at(indices),
            None => self.rows.clone(),
        }
    }

    fn selected_rows(&self) -> Option<Vec<RowRecord>> {
        self.selected.as_ref().map(|indices| self.rows_at(indices))
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn set_all_data(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
        self.active = None;
        self.selected = None;
    }

    fn update_or_insert(&mut self, rows: Vec<RowRecord>) {
        let Some(key) = self.key_field().map(str::to_string) else {
            self.rows.extend(rows);
            return;
        };

        for incoming in rows {
            let position = incoming.get(&key).and_then(|id| {
                self.rows
                    .iter()
                    .position(|existing| existing.get(&key) == Some(id))
            });
            match position {
                Some(i) => self.rows[i].extend(incoming),
                None => self.rows.push(incoming),
            }
        }
    }

    fn append_data(&mut self, rows: Vec<RowRecord>) {
        self.rows.extend(rows);
    }
}

/// Dispatcher double recording the calls the adapter makes.
#[derive(Default)]
pub(super) struct FakeDispatcher {
    pub live_selection: Option<String>,
    pub region_selected: bool,
    pub selection_cleared: bool,
    pub copies_triggered: usize,
}

impl CopyDispatcher for FakeDispatcher {
    fn selection_text(&self) -> Option<String> {
        self.live_selection.clone()
    }

    fn select_grid_region(&mut self) {
        self.region_selected = true;
    }

    fn exec_copy(&mut self) -> CopyEvent {
        self.copies_triggered += 1;
        CopyEvent::new()
    }

    fn clear_selection(&mut self) {
        self.selection_cleared = true;
        self.region_selected = false;
    }
}

pub(super) fn people_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("name", "Name"),
        ColumnDefinition::new("age", "Age"),
    ]
}

pub(super) fn record(pairs: &[(&str, &str)]) -> RowRecord {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), CellValue::text(*value)))
        .collect()
}

pub(super) fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells.iter().map(|cell| CellValue::text(*cell)).collect()
}

pub(super) fn text_grid(rows: &[&[&str]]) -> TabularGrid {
    rows.iter().map(|row| text_row(row)).collect()
}
