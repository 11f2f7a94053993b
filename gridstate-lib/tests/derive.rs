mod common;

use gridstate_lib::derive::derive_rows;
use gridstate_lib::model::{ColumnDescriptor, ColumnRegistry, Record, ValueType};
use gridstate_lib::query::{FilterSpec, SortKey, SortSpec};

use common::{engine, ids};

fn registry() -> ColumnRegistry {
    ColumnRegistry::new(vec![
        ColumnDescriptor::new("stage", "Stage", ValueType::Text).sortable(),
        ColumnDescriptor::new("value", "Value", ValueType::Number).sortable(),
    ])
}

fn row_ids<'a>(rows: &[&'a Record]) -> Vec<&'a str> {
    rows.iter().map(|r| r.id()).collect()
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_no_query_keeps_natural_order() {
    let records = common::deals();
    let rows = derive_rows(&records, &FilterSpec::new(), &SortSpec::new(), &registry());
    assert_eq!(row_ids(&rows), ["1", "2", "3", "4"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let records = vec![
        Record::new("a").set("stage", "Lead").set("value", 1i64),
        Record::new("b").set("stage", "Won").set("value", 2i64),
        Record::new("c").set("stage", "Lead").set("value", 3i64),
        Record::new("d").set("stage", "lead").set("value", 4i64),
    ];
    let sort = SortSpec::from_keys([SortKey::asc("stage")]);
    let rows = derive_rows(&records, &FilterSpec::new(), &sort, &registry());
    assert_eq!(row_ids(&rows), ["d", "a", "c", "b"]);

    let sort = SortSpec::from_keys([SortKey::desc("stage")]);
    let rows = derive_rows(&records, &FilterSpec::new(), &sort, &registry());
    assert_eq!(row_ids(&rows), ["b", "a", "c", "d"]);
}

#[test]
fn test_nulls_do_not_disturb_order() {
    let records = vec![
        Record::new("a").set("value", 3i64),
        Record::new("b"),
        Record::new("c").set("value", 1i64),
    ];
    let sort = SortSpec::from_keys([SortKey::asc("value")]);
    let rows = derive_rows(&records, &FilterSpec::new(), &sort, &registry());
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_unknown_sort_key_is_skipped() {
    let records = vec![
        Record::new("a").set("value", 2i64),
        Record::new("b").set("value", 1i64),
    ];
    let sort = SortSpec::from_keys([SortKey::asc("ghost"), SortKey::asc("value")]);
    let rows = derive_rows(&records, &FilterSpec::new(), &sort, &registry());
    assert_eq!(row_ids(&rows), ["b", "a"]);
}

#[test]
fn test_input_is_not_reordered() {
    let records = common::deals();
    let sort = SortSpec::from_keys([SortKey::desc("value")]);
    let _ = derive_rows(&records, &FilterSpec::new(), &sort, &common::registry());
    let natural: Vec<&str> = records.iter().map(|r| r.id()).collect();
    assert_eq!(natural, ["1", "2", "3", "4"]);
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_text_filter_is_case_insensitive_substring() {
    let mut engine = engine();
    engine.set_filter("name", "SERV");
    assert_eq!(ids(&engine), ["3"]);
}

#[test]
fn test_numeric_filter_matches_decimal_form() {
    let mut engine = engine();
    engine.set_filter("value", "500");
    // 125000 and 1500 match, 499 does not
    assert_eq!(ids(&engine), ["1", "2"]);
}

#[test]
fn test_filters_combine_with_and() {
    let mut engine = engine();
    engine.set_filter("owner", "smith");
    assert_eq!(ids(&engine), ["1", "3"]);
    engine.set_filter("name", "training");
    assert_eq!(ids(&engine), ["3"]);
}

#[test]
fn test_empty_or_all_clears_filter() {
    let mut engine = engine();
    engine.set_filter("owner", "smith");
    assert!(engine.set_filter("owner", "all"));
    assert!(engine.filter_spec().is_empty());

    engine.set_filter("owner", "smith");
    assert!(engine.set_filter("owner", "   "));
    assert!(engine.filter_spec().get("owner").is_none());
    assert_eq!(ids(&engine).len(), 4);
}

#[test]
fn test_null_field_fails_active_filter() {
    let mut spec = FilterSpec::new();
    spec.set("stage", "lead");
    assert!(!spec.matches(&Record::new("x")));
}

#[test]
fn test_filter_then_sort() {
    let mut engine = engine();
    engine.set_filter("owner", "sarah");
    engine.toggle_sort("value", false);
    assert_eq!(ids(&engine), ["2", "4"]);
}
