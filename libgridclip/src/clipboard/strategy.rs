use std::fmt;
use std::sync::Arc;

use enum_iterator::{Sequence, all};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::codec;
use super::model::{CellValue, ColumnDefinition, GridModel, RowRecord, StrategyParams, TabularGrid};

/// Built-in selectors: what data a copy exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// Pass-through of a previously captured visual-selection string.
    UserSelection,
    /// Rows reported by the row-selection collaborator; empty when the
    /// collaborator is absent.
    Selected,
    /// All rows.
    Table,
    /// Only the currently visible/filtered rows.
    Active,
}

impl SelectorKind {
    /// Registry name of this selector.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SelectorKind::UserSelection => "user_selection",
            SelectorKind::Selected => "selected",
            SelectorKind::Table => "table",
            SelectorKind::Active => "active",
        }
    }

    /// Looks a built-in selector up by registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        all::<Self>().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Built-in formatters: how exported data is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatterKind {
    /// Identity: hand the structured data through unchanged.
    Raw,
    /// Tab/newline-delimited text, optionally led by a title header row.
    Table,
}

impl FormatterKind {
    /// Registry name of this formatter.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormatterKind::Raw => "raw",
            FormatterKind::Table => "table",
        }
    }

    /// Looks a built-in formatter up by registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        all::<Self>().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comma-joined list of built-in selector names, for diagnostics.
pub(crate) fn known_selector_names() -> String {
    all::<SelectorKind>().map(SelectorKind::name).join(", ")
}

/// Comma-joined list of built-in formatter names, for diagnostics.
pub(crate) fn known_formatter_names() -> String {
    all::<FormatterKind>().map(FormatterKind::name).join(", ")
}

/// Structured data produced by a selector.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyData {
    Grid(TabularGrid),
    /// Captured selection text handed through verbatim.
    Text(String),
}

/// Final clipboard content produced by a formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardPayload {
    /// Structured rows for in-process consumers.
    Structured(TabularGrid),
    /// Wire-format text for the system clipboard.
    Text(String),
}

impl ClipboardPayload {
    /// The textual content, if this payload is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardPayload::Text(text) => Some(text),
            ClipboardPayload::Structured(_) => None,
        }
    }
}

/// Ad hoc selector callable; receives the grid and the selector params.
pub type SelectorFn<G> = Arc<dyn Fn(&G, &StrategyParams) -> CopyData>;

/// Ad hoc formatter callable; receives the grid, the selected data, and the
/// formatter params.
pub type FormatterFn<G> = Arc<dyn Fn(&G, CopyData, &StrategyParams) -> ClipboardPayload>;

/// An active selector: a built-in kind or a user-supplied callable.
pub enum Selector<G> {
    Builtin(SelectorKind),
    Custom(SelectorFn<G>),
}

impl<G> Clone for Selector<G> {
    fn clone(&self) -> Self {
        match self {
            Selector::Builtin(kind) => Selector::Builtin(*kind),
            Selector::Custom(f) => Selector::Custom(f.clone()),
        }
    }
}

impl<G> fmt::Debug for Selector<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Builtin(kind) => write!(f, "Selector::Builtin({kind})"),
            Selector::Custom(_) => f.write_str("Selector::Custom(..)"),
        }
    }
}

/// An active formatter: a built-in kind or a user-supplied callable.
pub enum Formatter<G> {
    Builtin(FormatterKind),
    Custom(FormatterFn<G>),
}

impl<G> Clone for Formatter<G> {
    fn clone(&self) -> Self {
        match self {
            Formatter::Builtin(kind) => Formatter::Builtin(*kind),
            Formatter::Custom(f) => Formatter::Custom(f.clone()),
        }
    }
}

impl<G> fmt::Debug for Formatter<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Builtin(kind) => write!(f, "Formatter::Builtin({kind})"),
            Formatter::Custom(_) => f.write_str("Formatter::Custom(..)"),
        }
    }
}

/// A strategy choice supplied at copy time: by registry name, or directly
/// as a callable for one-off overrides.
pub enum SelectorChoice<G> {
    Named(String),
    Callable(SelectorFn<G>),
}

impl<G> SelectorChoice<G> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// See [`SelectorChoice`].
pub enum FormatterChoice<G> {
    Named(String),
    Callable(FormatterFn<G>),
}

impl<G> FormatterChoice<G> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Materializes rows through the grid's column order: one cell per defined
/// column, in definition order, absent fields becoming empty cells.
#[must_use]
pub fn rows_to_grid(columns: &[ColumnDefinition], rows: &[RowRecord]) -> TabularGrid {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(&column.field).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Runs a selector against the grid.
pub(crate) fn run_selector<G: GridModel>(
    selector: &Selector<G>,
    grid: &G,
    params: &StrategyParams,
) -> CopyData {
    match selector {
        Selector::Builtin(SelectorKind::UserSelection) => {
            CopyData::Text(params.selection_text.clone().unwrap_or_default())
        }
        Selector::Builtin(SelectorKind::Selected) => {
            let rows = grid.selected_rows().unwrap_or_default();
            CopyData::Grid(rows_to_grid(&grid.columns(), &rows))
        }
        Selector::Builtin(SelectorKind::Table) => {
            CopyData::Grid(rows_to_grid(&grid.columns(), &grid.all_rows()))
        }
        Selector::Builtin(SelectorKind::Active) => {
            CopyData::Grid(rows_to_grid(&grid.columns(), &grid.active_rows()))
        }
        Selector::Custom(f) => f(grid, params),
    }
}

/// Runs a formatter over selected data.
///
/// The `table` formatter renders delimited text, prepending a row of column
/// titles when `params.include_header` is set; handed captured text instead
/// of rows, it passes the text through unchanged.
pub(crate) fn run_formatter<G: GridModel>(
    formatter: &Formatter<G>,
    grid: &G,
    data: CopyData,
    params: &StrategyParams,
) -> ClipboardPayload {
    match formatter {
        Formatter::Builtin(FormatterKind::Raw) => match data {
            CopyData::Grid(rows) => ClipboardPayload::Structured(codec::encode_raw(rows)),
            CopyData::Text(text) => ClipboardPayload::Text(text),
        },
        Formatter::Builtin(FormatterKind::Table) => match data {
            CopyData::Grid(rows) => {
                let mut output = TabularGrid::new();
                if params.include_header {
                    output.push(
                        grid.columns()
                            .iter()
                            .map(|column| CellValue::text(column.title.clone()))
                            .collect(),
                    );
                }
                output.extend(rows);
                ClipboardPayload::Text(codec::encode_delimited(&output))
            }
            CopyData::Text(text) => ClipboardPayload::Text(text),
        },
        Formatter::Custom(f) => f(grid, data, params),
    }
}
