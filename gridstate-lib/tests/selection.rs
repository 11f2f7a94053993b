mod common;

use gridstate_lib::selection::{RowSelection, SelectAllState};

use common::engine;

#[test]
fn test_toggle_selected_and_expanded_are_independent() {
    let mut selection = RowSelection::new();
    assert!(selection.toggle_selected("1"));
    assert!(selection.toggle_expanded("2"));
    assert!(selection.is_selected("1"));
    assert!(!selection.is_selected("2"));
    assert!(selection.is_expanded("2"));

    assert!(!selection.toggle_selected("1"));
    assert!(!selection.is_selected("1"));
}

#[test]
fn test_select_all_state() {
    let mut selection = RowSelection::new();
    let shown = ["1", "2"];
    assert_eq!(selection.select_all_state(shown), SelectAllState::Unchecked);
    selection.toggle_selected("1");
    assert_eq!(selection.select_all_state(shown), SelectAllState::Indeterminate);
    selection.toggle_selected("2");
    assert_eq!(selection.select_all_state(shown), SelectAllState::Checked);
    assert_eq!(selection.select_all_state([]), SelectAllState::Unchecked);
}

#[test]
fn test_select_all_selects_only_displayed_rows() {
    let mut engine = engine();
    engine.set_filter("owner", "sarah");
    assert!(engine.select_all(true));

    let mut selected: Vec<&str> = engine.selection().selected.iter().map(String::as_str).collect();
    selected.sort();
    assert_eq!(selected, ["2", "4"]);
    assert_eq!(engine.select_all_state(), SelectAllState::Checked);

    engine.set_filter("owner", "");
    assert_eq!(engine.select_all_state(), SelectAllState::Indeterminate);
}

#[test]
fn test_select_all_with_no_displayed_rows_selects_nothing() {
    let mut engine = engine();
    assert!(engine.select_all(true));
    assert_eq!(engine.selection().selected.len(), 4);

    engine.set_filter("name", "no such deal");
    assert_eq!(engine.row_count(), 0);
    assert!(engine.select_all(true));
    assert!(engine.selection().selected.is_empty());
    assert_eq!(engine.select_all_state(), SelectAllState::Unchecked);
}

#[test]
fn test_select_all_false_clears() {
    let mut engine = engine();
    engine.toggle_row_selection("1");
    engine.toggle_row_selection("3");
    assert!(engine.select_all(false));
    assert!(engine.selection().selected.is_empty());
    assert!(!engine.select_all(false));
}

#[test]
fn test_selection_survives_filtering() {
    let mut engine = engine();
    engine.toggle_row_selection("1");
    engine.set_filter("owner", "sarah");
    assert!(engine.selection().is_selected("1"));
    assert_eq!(engine.select_all_state(), SelectAllState::Unchecked);
}

#[test]
fn test_selected_records_skips_missing_ids() {
    let mut engine = engine();
    engine.toggle_row_selection("2");
    engine.toggle_row_selection("ghost");
    let ids: Vec<String> = engine
        .selected_records()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn test_clear_selection_reports_change() {
    let mut engine = engine();
    assert!(!engine.clear_selection());
    engine.toggle_row_selection("2");
    assert!(engine.clear_selection());
}
