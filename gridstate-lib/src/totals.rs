//! Footer aggregates over the displayed rows.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::format::{format_currency, format_number};
use crate::model::{ColumnDescriptor, Record, ValueType};

/// Aggregate shown under one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnTotal {
    /// Sum of a currency column.
    Currency(Decimal),
    /// Sum of a number column.
    Sum(f64),
    /// Mean of a percentage column; `None` when no row has a value.
    Average(Option<f64>),
    /// Number of displayed rows.
    Count(usize),
    /// Nothing shown.
    Empty,
}

impl ColumnTotal {
    /// Footer text for this total.
    pub fn display(&self, noun: &str) -> String {
        match self {
            ColumnTotal::Currency(sum) => format_currency(*sum),
            ColumnTotal::Sum(sum) => format_number(*sum),
            ColumnTotal::Average(Some(mean)) => format!("{mean:.1}%"),
            ColumnTotal::Average(None) => String::new(),
            ColumnTotal::Count(n) => format!("{n} {noun}"),
            ColumnTotal::Empty => String::new(),
        }
    }
}

/// Compute one total per column, in the given column order.
///
/// Currency and number columns are summed, percentage columns averaged
/// over rows that have a value, and the first text column counts rows.
/// Null cells are skipped.
pub fn column_totals(rows: &[Record], columns: &[&ColumnDescriptor]) -> Vec<(String, ColumnTotal)> {
    let first_text = columns
        .iter()
        .position(|c| c.value_type == ValueType::Text);

    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let total = match column.value_type {
                ValueType::Currency => ColumnTotal::Currency(
                    rows.iter()
                        .filter_map(|r| {
                            let value = r.value(&column.id);
                            value
                                .as_decimal()
                                .or_else(|| value.as_f64().and_then(Decimal::from_f64))
                        })
                        .sum(),
                ),
                ValueType::Number => {
                    ColumnTotal::Sum(rows.iter().filter_map(|r| r.get_f64(&column.id)).sum())
                }
                ValueType::Percentage => {
                    let values: Vec<f64> = rows.iter().filter_map(|r| r.get_f64(&column.id)).collect();
                    if values.is_empty() {
                        ColumnTotal::Average(None)
                    } else {
                        ColumnTotal::Average(Some(values.iter().sum::<f64>() / values.len() as f64))
                    }
                }
                ValueType::Text if Some(index) == first_text => ColumnTotal::Count(rows.len()),
                _ => ColumnTotal::Empty,
            };
            (column.id.clone(), total)
        })
        .collect()
}
