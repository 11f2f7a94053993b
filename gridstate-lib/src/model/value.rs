//! Value enum for dynamic field values

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;

use super::types::Money;

/// The declared type of a column's values.
///
/// Each variant has exactly one filtering, ordering and formatting rule;
/// those rules are exhaustive matches over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Free-form text.
    Text,
    /// Plain number.
    Number,
    /// Monetary amount.
    Currency,
    /// Percentage expressed in whole units (`85` means 85%).
    Percentage,
    /// Calendar date.
    Date,
    /// One of a fixed set of options.
    Select,
}

impl ValueType {
    /// Returns the lowercase type name.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Currency => "currency",
            ValueType::Percentage => "percentage",
            ValueType::Date => "date",
            ValueType::Select => "select",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic value stored in a record field.
///
/// # Type Mapping
///
/// | Column type | Rust Variant |
/// |-------------|--------------|
/// | (absent) | `Null` |
/// | text | `Text` |
/// | number | `Number` |
/// | currency | `Currency` |
/// | percentage | `Percentage` |
/// | date | `Date` |
/// | select | `Select` |
///
/// # Example
///
/// ```
/// use gridstate_lib::model::Value;
///
/// let name = Value::from("Cloud Migration Project");
/// let probability = Value::Percentage(65.0);
/// assert_eq!(name.as_text(), Some("Cloud Migration Project"));
/// assert_eq!(probability.as_f64(), Some(65.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Text value.
    Text(String),
    /// Plain number.
    Number(f64),
    /// Monetary value.
    Currency(Money),
    /// Percentage in whole units.
    Percentage(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Selected option label.
    Select(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the value type, or `None` for null.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Null => None,
            Value::Text(_) => Some(ValueType::Text),
            Value::Number(_) => Some(ValueType::Number),
            Value::Currency(_) => Some(ValueType::Currency),
            Value::Percentage(_) => Some(ValueType::Percentage),
            Value::Date(_) => Some(ValueType::Date),
            Value::Select(_) => Some(ValueType::Select),
        }
    }

    /// Returns the string content of text and select values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Select(s) => Some(s),
            _ => None,
        }
    }

    /// Returns numeric values as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) | Value::Percentage(n) => Some(*n),
            Value::Currency(m) => m.value().to_f64(),
            _ => None,
        }
    }

    /// Returns currency amounts as an exact decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Currency(m) => Some(m.value()),
            _ => None,
        }
    }

    /// Unformatted string form used to seed edit buffers.
    ///
    /// Numbers use their shortest decimal form and dates use `YYYY-MM-DD`,
    /// so the result parses back into the same value.
    pub fn raw_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) | Value::Select(s) => s.clone(),
            Value::Number(n) | Value::Percentage(n) => n.to_string(),
            Value::Currency(m) => m.canonical(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Currency(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
