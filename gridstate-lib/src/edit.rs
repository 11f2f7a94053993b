//! Inline cell edit sessions.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EditError;
use crate::model::types::Money;
use crate::model::{ColumnDescriptor, Value, ValueType};

/// Date format accepted by edit buffers.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// An in-progress edit of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Record being edited.
    pub record_id: String,
    /// Column being edited.
    pub column_id: String,
    /// Value before the edit started.
    pub original: Value,
    /// Text typed so far.
    pub buffer: String,
}

impl EditSession {
    /// Start editing with the buffer seeded from the current value.
    pub fn new(record_id: impl Into<String>, column_id: impl Into<String>, original: Value) -> Self {
        let buffer = original.raw_string();
        Self {
            record_id: record_id.into(),
            column_id: column_id.into(),
            original,
            buffer,
        }
    }

    /// Append a typed character.
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Replace the whole buffer.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }
}

/// Parse edit text into a value of the column's type.
///
/// Blank input clears non-text cells. Currency accepts a leading `$` and
/// thousands separators, percentages a trailing `%`, dates `YYYY-MM-DD`,
/// and select columns only their listed options.
pub fn parse_input(column: &ColumnDescriptor, input: &str) -> Result<Value, EditError> {
    let trimmed = input.trim();
    let invalid = || EditError::InvalidValue {
        column: column.id.clone(),
        input: input.to_string(),
        expected: column.value_type,
    };

    if trimmed.is_empty() && column.value_type != ValueType::Text {
        return Ok(Value::Null);
    }

    match column.value_type {
        ValueType::Text => Ok(Value::Text(input.to_string())),
        ValueType::Number => parse_number(trimmed).map(Value::Number).ok_or_else(invalid),
        ValueType::Percentage => parse_number(trimmed.trim_end_matches('%'))
            .map(Value::Percentage)
            .ok_or_else(invalid),
        ValueType::Currency => {
            let digits: String = trimmed
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',')
                .collect();
            digits
                .parse::<Decimal>()
                .map(|d| Value::Currency(Money::new(d)))
                .map_err(|_| invalid())
        }
        ValueType::Date => NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
            .map(Value::Date)
            .map_err(|_| invalid()),
        ValueType::Select => {
            if column.accepts_option(trimmed) {
                Ok(Value::Select(trimmed.to_string()))
            } else {
                Err(invalid())
            }
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_with_symbol_and_grouping() {
        let column = ColumnDescriptor::new("value", "Value", ValueType::Currency);
        assert_eq!(
            parse_input(&column, "$1,250.50").unwrap(),
            Value::Currency(Money::new(Decimal::new(125050, 2)))
        );
    }

    #[test]
    fn test_parse_percentage_strips_sign() {
        let column = ColumnDescriptor::new("p", "P", ValueType::Percentage);
        assert_eq!(parse_input(&column, "85%").unwrap(), Value::Percentage(85.0));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let column = ColumnDescriptor::new("n", "N", ValueType::Number);
        assert!(parse_input(&column, "inf").is_err());
    }

    #[test]
    fn test_blank_clears_numeric_but_not_text() {
        let number = ColumnDescriptor::new("n", "N", ValueType::Number);
        let text = ColumnDescriptor::new("t", "T", ValueType::Text);
        assert_eq!(parse_input(&number, "  ").unwrap(), Value::Null);
        assert_eq!(parse_input(&text, "").unwrap(), Value::Text(String::new()));
    }
}
