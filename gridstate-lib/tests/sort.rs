mod common;

use gridstate_lib::query::{SortDirection, SortKey, SortSpec};
use gridstate_lib::{ColumnAction, SortIndicator};

use common::{engine, ids};

// =============================================================================
// SortSpec cycle
// =============================================================================

#[test]
fn test_single_key_cycle() {
    let mut sort = SortSpec::new();

    sort.toggle("value", false);
    assert_eq!(sort.keys(), [SortKey::asc("value")]);

    sort.toggle("value", false);
    assert_eq!(sort.keys(), [SortKey::desc("value")]);

    sort.toggle("value", false);
    assert!(sort.is_empty());
}

#[test]
fn test_single_key_replaces_other_columns() {
    let mut sort = SortSpec::from_keys([SortKey::desc("name"), SortKey::asc("value")]);
    sort.toggle("value", false);
    assert_eq!(sort.keys(), [SortKey::asc("value")]);
}

#[test]
fn test_multi_key_appends_flips_and_removes() {
    let mut sort = SortSpec::new();
    sort.toggle("owner", true);
    sort.toggle("value", true);
    assert_eq!(sort.keys(), [SortKey::asc("owner"), SortKey::asc("value")]);

    sort.toggle("owner", true);
    assert_eq!(sort.keys(), [SortKey::desc("owner"), SortKey::asc("value")]);

    sort.toggle("owner", true);
    assert_eq!(sort.keys(), [SortKey::asc("value")]);
}

#[test]
fn test_from_keys_drops_duplicate_columns() {
    let sort = SortSpec::from_keys([SortKey::asc("a"), SortKey::desc("a"), SortKey::asc("b")]);
    assert_eq!(sort.len(), 2);
    assert_eq!(sort.direction("a"), Some(SortDirection::Asc));
}

#[test]
fn test_sort_spec_serializes_as_key_direction_list() {
    let sort = SortSpec::from_keys([SortKey::desc("value")]);
    let json = serde_json::to_string(&sort).unwrap();
    assert_eq!(json, r#"[{"key":"value","direction":"desc"}]"#);
}

// =============================================================================
// Engine sorting
// =============================================================================

#[test]
fn test_engine_sorts_text_case_insensitively() {
    let mut engine = engine();
    assert!(engine.toggle_sort("name", false));
    assert_eq!(ids(&engine), ["4", "2", "1", "3"]);
}

#[test]
fn test_engine_sorts_currency_by_amount() {
    let mut engine = engine();
    engine.toggle_sort("value", false);
    assert_eq!(ids(&engine), ["3", "2", "4", "1"]);
    engine.toggle_sort("value", false);
    assert_eq!(ids(&engine), ["1", "4", "2", "3"]);
    engine.toggle_sort("value", false);
    assert_eq!(ids(&engine), ["1", "2", "3", "4"]);
}

#[test]
fn test_engine_multi_key_uses_priority_order() {
    let mut engine = engine();
    engine.toggle_sort("owner", true);
    engine.toggle_sort("value", true);
    engine.toggle_sort("value", true);
    // John Smith: 125000, 499 / Sarah Johnson: 80000, 1500
    assert_eq!(ids(&engine), ["1", "3", "4", "2"]);
}

#[test]
fn test_non_sortable_column_is_ignored() {
    let mut engine = engine();
    assert!(!engine.toggle_sort("missing", false));
    assert!(engine.sort_spec().is_empty());
}

#[test]
fn test_sort_indicator_reports_priority_only_for_multi_sort() {
    let mut engine = engine();
    engine.toggle_sort("value", false);
    assert_eq!(
        engine.sort_indicator("value"),
        Some(SortIndicator {
            direction: SortDirection::Asc,
            priority: None
        })
    );

    engine.toggle_sort("name", true);
    assert_eq!(engine.sort_indicator("name").unwrap().priority, Some(2));
    assert_eq!(engine.sort_indicator("owner"), None);
}

#[test]
fn test_column_actions() {
    let mut engine = engine();
    assert!(engine.apply_column_action("value", ColumnAction::SortDescending));
    assert_eq!(engine.sort_spec().keys(), [SortKey::desc("value")]);
    assert!(!engine.apply_column_action("value", ColumnAction::SortDescending));

    assert!(engine.apply_column_action("owner", ColumnAction::Hide));
    assert!(!engine.layout().is_visible("owner"));
    assert!(!engine.apply_column_action("owner", ColumnAction::Hide));
}
