use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single grid cell value.
///
/// Cell values are opaque to the clipboard subsystem: they are carried,
/// stringified for the wire, and handed back to the grid, but never
/// interpreted arithmetically. Cells decoded from pasted text are always
/// [`CellValue::Text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An absent or undefined cell. Stringifies to the empty string.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Creates a text cell from anything stringish.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Stringifies the cell for the tab-delimited wire format.
    /// Absent cells become the empty string.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Bool(flag) => flag.to_string(),
        }
    }

    /// Returns true if the stringified, trimmed cell is empty.
    /// Header matching treats such cells as blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }
}

/// Identity of a grid column. Owned by the grid; read-only here.
///
/// `field` is the stable key rows are bound by; `title` is the
/// human-readable header used for header-row matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub field: String,
    pub title: String,
}

impl ColumnDefinition {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
        }
    }
}

/// A row materialized as an ordered `field -> value` map.
///
/// Produced transiently while decoding a paste and consumed immediately by
/// the grid's write operations. Keys are always a subset of known column
/// fields.
pub type RowRecord = IndexMap<String, CellValue>;

/// Ordered rows of ordered cells; the canonical intermediate form for both
/// copy serialization and paste decoding.
pub type TabularGrid = Vec<Vec<CellValue>>;

/// Positional correspondence between pasted columns and grid columns.
///
/// The i-th entry maps the i-th pasted column; `None` marks a pasted column
/// with no grid counterpart, whose values are silently dropped. Length
/// always equals the pasted data's column count.
pub type ColumnMap = Vec<Option<ColumnDefinition>>;

/// The grid collaborator seam.
///
/// The clipboard subsystem reads the column registry and row store through
/// this trait and mutates the row store only via the three write operations
/// exposed here, never by reaching into grid internals.
pub trait GridModel {
    /// Ordered column definitions.
    fn columns(&self) -> Vec<ColumnDefinition>;

    /// Every row in the store.
    fn all_rows(&self) -> Vec<RowRecord>;

    /// Only the currently visible/filtered rows.
    fn active_rows(&self) -> Vec<RowRecord>;

    /// Rows from the row-selection collaborator. `None` means the
    /// collaborator is absent, which callers treat as an empty selection.
    fn selected_rows(&self) -> Option<Vec<RowRecord>>;

    /// True while a cell edit session is in progress.
    fn is_editing(&self) -> bool;

    /// Discards existing data and installs `rows` as the full dataset.
    fn set_all_data(&mut self, rows: Vec<RowRecord>);

    /// Merges identity-matched rows in place and appends the rest; identity
    /// matching is the grid's own concern.
    fn update_or_insert(&mut self, rows: Vec<RowRecord>);

    /// Appends `rows` without matching.
    fn append_data(&mut self, rows: Vec<RowRecord>);
}

/// Opaque payload forwarded from a copy invocation to the active selector
/// and formatter. Built-in strategies read the typed fields; ad hoc
/// strategies may stash anything under `custom`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Captured visual-selection text, consumed by the `user_selection`
    /// selector.
    pub selection_text: Option<String>,

    /// Emit the column titles as a leading row (`table` formatter).
    pub include_header: bool,

    /// Free-form payload for custom strategies.
    pub custom: Option<serde_json::Value>,
}

impl StrategyParams {
    /// Params carrying captured selection text.
    #[must_use]
    pub fn selection(text: impl Into<String>) -> Self {
        Self {
            selection_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Params requesting a leading header row.
    #[must_use]
    pub fn with_header() -> Self {
        Self {
            include_header: true,
            ..Self::default()
        }
    }
}
