pub mod adapter;
pub mod codec;
pub mod events;
pub mod mapper;
pub mod model;
pub mod strategy;

pub use adapter::{ArmState, Clipboard, CopyRequest, PasteOutcome};
pub use codec::{decode, encode_delimited, encode_raw};
pub use events::{CopyDispatcher, CopyEvent, PasteEvent, PasteTargetKind};
pub use mapper::{ColumnResolution, records_from_grid, resolve_columns, rows_to_records};
pub use model::{
    CellValue, ColumnDefinition, ColumnMap, GridModel, RowRecord, StrategyParams, TabularGrid,
};
pub use strategy::{
    ClipboardPayload, CopyData, Formatter, FormatterChoice, FormatterFn, FormatterKind, Selector,
    SelectorChoice, SelectorFn, SelectorKind, rows_to_grid,
};
