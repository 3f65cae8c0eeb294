use std::sync::Arc;

use super::support::{FakeGrid, people_columns, record, text_grid};
use crate::clipboard::model::StrategyParams;
use crate::clipboard::strategy::{
    ClipboardPayload, CopyData, Formatter, FormatterKind, Selector, SelectorKind, rows_to_grid,
    run_formatter, run_selector,
};

fn populated_grid() -> FakeGrid {
    let mut grid = FakeGrid::new(people_columns());
    grid.push_row(&[("name", "ada"), ("age", "36")]);
    grid.push_row(&[("name", "grace"), ("age", "85")]);
    grid
}

// ========================
// Strategy names
// ========================

#[test]
fn selector_names_resolve_round_trip() {
    for kind in enum_iterator::all::<SelectorKind>() {
        assert_eq!(SelectorKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(SelectorKind::from_name("bogus"), None);
}

#[test]
fn formatter_names_resolve_round_trip() {
    for kind in enum_iterator::all::<FormatterKind>() {
        assert_eq!(FormatterKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(FormatterKind::from_name("bogus"), None);
}

// ========================
// Row materialization
// ========================

#[test]
fn rows_to_grid_follows_column_order() {
    let columns = people_columns();
    let rows = vec![record(&[("age", "36"), ("name", "ada")])];

    assert_eq!(
        rows_to_grid(&columns, &rows),
        text_grid(&[&["ada", "36"]])
    );
}

#[test]
fn rows_to_grid_fills_missing_fields_with_empty_cells() {
    let columns = people_columns();
    let rows = vec![record(&[("name", "ada")])];

    let grid = rows_to_grid(&columns, &rows);
    assert_eq!(grid[0][1], crate::clipboard::model::CellValue::Empty);
}

// ========================
// Selectors
// ========================

#[test]
fn table_selector_exports_all_rows() {
    let grid = populated_grid();
    let data = run_selector(
        &Selector::Builtin(SelectorKind::Table),
        &grid,
        &StrategyParams::default(),
    );

    assert_eq!(
        data,
        CopyData::Grid(text_grid(&[&["ada", "36"], &["grace", "85"]]))
    );
}

#[test]
fn active_selector_exports_only_visible_rows() {
    let mut grid = populated_grid();
    grid.active = Some(vec![1]);

    let data = run_selector(
        &Selector::Builtin(SelectorKind::Active),
        &grid,
        &StrategyParams::default(),
    );

    assert_eq!(data, CopyData::Grid(text_grid(&[&["grace", "85"]])));
}

#[test]
fn selected_selector_exports_selection() {
    let mut grid = populated_grid();
    grid.selected = Some(vec![0]);

    let data = run_selector(
        &Selector::Builtin(SelectorKind::Selected),
        &grid,
        &StrategyParams::default(),
    );

    assert_eq!(data, CopyData::Grid(text_grid(&[&["ada", "36"]])));
}

#[test]
fn selected_selector_tolerates_absent_collaborator() {
    let grid = populated_grid();
    assert_eq!(grid.selected, None);

    let data = run_selector(
        &Selector::Builtin(SelectorKind::Selected),
        &grid,
        &StrategyParams::default(),
    );

    assert_eq!(data, CopyData::Grid(Vec::new()));
}

#[test]
fn user_selection_selector_passes_captured_text_through() {
    let grid = populated_grid();
    let data = run_selector(
        &Selector::Builtin(SelectorKind::UserSelection),
        &grid,
        &StrategyParams::selection("free text"),
    );

    assert_eq!(data, CopyData::Text("free text".to_string()));
}

// ========================
// Formatters
// ========================

#[test]
fn raw_formatter_keeps_structured_data() {
    let grid = populated_grid();
    let rows = text_grid(&[&["ada", "36"]]);

    let payload = run_formatter(
        &Formatter::Builtin(FormatterKind::Raw),
        &grid,
        CopyData::Grid(rows.clone()),
        &StrategyParams::default(),
    );

    assert_eq!(payload, ClipboardPayload::Structured(rows));
}

#[test]
fn table_formatter_renders_delimited_text() {
    let grid = populated_grid();
    let rows = text_grid(&[&["ada", "36"], &["grace", "85"]]);

    let payload = run_formatter(
        &Formatter::Builtin(FormatterKind::Table),
        &grid,
        CopyData::Grid(rows),
        &StrategyParams::default(),
    );

    assert_eq!(
        payload.as_text(),
        Some("ada\t36\ngrace\t85")
    );
}

#[test]
fn table_formatter_prepends_header_on_request() {
    let grid = populated_grid();
    let rows = text_grid(&[&["ada", "36"]]);

    let payload = run_formatter(
        &Formatter::Builtin(FormatterKind::Table),
        &grid,
        CopyData::Grid(rows),
        &StrategyParams::with_header(),
    );

    assert_eq!(payload.as_text(), Some("Name\tAge\nada\t36"));
}

#[test]
fn table_formatter_passes_captured_text_through() {
    let grid = populated_grid();
    let payload = run_formatter(
        &Formatter::Builtin(FormatterKind::Table),
        &grid,
        CopyData::Text("free text".to_string()),
        &StrategyParams::default(),
    );

    assert_eq!(payload, ClipboardPayload::Text("free text".to_string()));
}

#[test]
fn custom_formatter_receives_data_and_params() {
    let grid = populated_grid();
    let formatter = Formatter::Custom(Arc::new(|_: &FakeGrid, data, params: &StrategyParams| {
        let rows = match data {
            CopyData::Grid(rows) => rows.len(),
            CopyData::Text(_) => 0,
        };
        let tag = params
            .custom
            .as_ref()
            .and_then(|value| value.as_str())
            .unwrap_or("-");
        ClipboardPayload::Text(format!("{tag}:{rows}"))
    }));

    let payload = run_formatter(
        &formatter,
        &grid,
        CopyData::Grid(text_grid(&[&["ada", "36"]])),
        &StrategyParams {
            custom: Some(serde_json::Value::String("rows".to_string())),
            ..StrategyParams::default()
        },
    );

    assert_eq!(payload, ClipboardPayload::Text("rows:1".to_string()));
}

#[test]
fn structured_payload_has_no_text() {
    let payload = ClipboardPayload::Structured(Vec::new());
    assert_eq!(payload.as_text(), None);
}
