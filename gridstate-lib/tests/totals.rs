mod common;

use gridstate_lib::format::format_value;
use gridstate_lib::model::types::Money;
use gridstate_lib::model::{Value, ValueType};
use gridstate_lib::totals::ColumnTotal;
use rust_decimal::Decimal;

use common::{date, engine};

fn total<'a>(totals: &'a [(String, ColumnTotal)], id: &str) -> &'a ColumnTotal {
    &totals.iter().find(|(c, _)| c == id).unwrap().1
}

#[test]
fn test_totals_over_all_rows() {
    let engine = engine();
    let totals = engine.totals();

    assert_eq!(total(&totals, "name"), &ColumnTotal::Count(4));
    assert_eq!(total(&totals, "value"), &ColumnTotal::Currency(Decimal::from(206_999)));
    assert_eq!(total(&totals, "probability"), &ColumnTotal::Average(Some(60.0)));
    assert_eq!(total(&totals, "owner"), &ColumnTotal::Empty);

    assert_eq!(total(&totals, "name").display("deals"), "4 deals");
    assert_eq!(total(&totals, "value").display("deals"), "$206,999.00");
    assert_eq!(total(&totals, "probability").display("deals"), "60.0%");
}

#[test]
fn test_totals_follow_filter_and_visibility() {
    let mut engine = engine();
    engine.set_filter("owner", "sarah");
    engine.toggle_column_visibility("probability");

    let totals = engine.totals();
    assert_eq!(totals.len(), 4);
    assert_eq!(total(&totals, "value"), &ColumnTotal::Currency(Decimal::from(81_500)));
    assert_eq!(total(&totals, "name"), &ColumnTotal::Count(2));
}

#[test]
fn test_average_of_no_values_is_blank() {
    let mut engine = engine();
    engine.set_filter("name", "nothing matches");
    let totals = engine.totals();
    assert_eq!(total(&totals, "probability"), &ColumnTotal::Average(None));
    assert_eq!(total(&totals, "probability").display("deals"), "");
}

#[test]
fn test_format_cells() {
    assert_eq!(
        format_value(&Value::Currency(Money::from_int(125_000)), ValueType::Currency),
        "$125,000.00"
    );
    assert_eq!(format_value(&Value::Date(date(2024, 3, 1)), ValueType::Date), "Mar 01, 2024");
    assert_eq!(format_value(&Value::Percentage(75.0), ValueType::Percentage), "75%");
    assert_eq!(format_value(&Value::Null, ValueType::Text), "");
    assert_eq!(format_value(&Value::Number(1234567.0), ValueType::Number), "1,234,567");
}
