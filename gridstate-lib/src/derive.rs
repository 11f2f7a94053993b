//! Row derivation pipeline.
//!
//! Maps raw records plus the query state to the ordered sequence of rows
//! the grid displays. Derivation is pure: the input slice is never
//! reordered and the same inputs always produce the same output.

use std::cmp::Ordering;

use crate::model::{ColumnRegistry, Record, Value};
use crate::query::{FilterSpec, SortSpec};

/// Filter then sort `records`, returning references in display order.
///
/// Records failing any filter are dropped. When `sort` is non-empty the
/// remaining rows are ordered by each key in priority order; rows that tie
/// on every key keep their original relative order. Sort keys naming a
/// column missing from the registry are skipped.
///
/// # Example
///
/// ```
/// use gridstate_lib::derive::derive_rows;
/// use gridstate_lib::model::{ColumnDescriptor, ColumnRegistry, Record, ValueType};
/// use gridstate_lib::query::{FilterSpec, SortKey, SortSpec};
///
/// let registry = ColumnRegistry::new(vec![
///     ColumnDescriptor::new("value", "Value", ValueType::Number).sortable(),
/// ]);
/// let records = vec![
///     Record::new("a").set("value", 20i64),
///     Record::new("b").set("value", 10i64),
/// ];
/// let sort = SortSpec::from_keys([SortKey::asc("value")]);
///
/// let rows = derive_rows(&records, &FilterSpec::new(), &sort, &registry);
/// let ids: Vec<&str> = rows.iter().map(|r| r.id()).collect();
/// assert_eq!(ids, ["b", "a"]);
/// ```
pub fn derive_rows<'a>(
    records: &'a [Record],
    filter: &FilterSpec,
    sort: &SortSpec,
    registry: &ColumnRegistry,
) -> Vec<&'a Record> {
    let mut rows: Vec<&Record> = records.iter().filter(|r| filter.matches(r)).collect();

    if sort.is_empty() {
        return rows;
    }

    let keys: Vec<_> = sort
        .keys()
        .iter()
        .filter(|k| registry.contains(&k.column_id))
        .collect();

    // sort_by is stable, so full ties keep input order
    rows.sort_by(|a, b| {
        for key in &keys {
            let ordering = compare_values(a.value(&key.column_id), b.value(&key.column_id));
            if ordering != Ordering::Equal {
                return key.direction.apply(ordering);
            }
        }
        Ordering::Equal
    });

    rows
}

/// Ascending comparison of two field values.
///
/// Text and select values use [`locale_cmp`], numeric values compare by
/// magnitude and dates chronologically. Values of different kinds, nulls
/// and NaN compare equal so they never disturb stability.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Text(x) | Value::Select(x), Value::Text(y) | Value::Select(y)) => locale_cmp(x, y),
        (Value::Currency(x), Value::Currency(y)) => x.cmp(y),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (
            Value::Number(_) | Value::Currency(_) | Value::Percentage(_),
            Value::Number(_) | Value::Currency(_) | Value::Percentage(_),
        ) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

/// Case-insensitive ordering with lowercase before uppercase on ties, so
/// `"apple" < "banana" < "Banana"`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
