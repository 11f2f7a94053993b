//! Display formatting for cell values.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::model::{Value, ValueType};

/// Date format shown in cells (`Feb 15, 2024`).
pub const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Format a value for display in a column of the given type.
///
/// ```
/// use gridstate_lib::format::format_value;
/// use gridstate_lib::model::{Value, ValueType};
/// use gridstate_lib::model::types::Money;
///
/// let value = Value::Currency(Money::from_int(125_000));
/// assert_eq!(format_value(&value, ValueType::Currency), "$125,000.00");
/// assert_eq!(format_value(&Value::Percentage(85.0), ValueType::Percentage), "85%");
/// ```
pub fn format_value(value: &Value, value_type: ValueType) -> String {
    match (value, value_type) {
        (Value::Null, _) => String::new(),
        (Value::Currency(m), _) => format_currency(m.value()),
        (Value::Number(n), ValueType::Currency) => {
            format_currency(Decimal::from_f64_retain(*n).unwrap_or_default())
        }
        (Value::Percentage(n), _) | (Value::Number(n), ValueType::Percentage) => {
            format!("{}%", n)
        }
        (Value::Number(n), _) => format_number(*n),
        (Value::Date(d), _) => d.format(DATE_DISPLAY_FORMAT).to_string(),
        (Value::Text(s) | Value::Select(s), _) => s.clone(),
    }
}

/// Format a decimal amount as US dollars with cents (`-$1,234.50`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Format a number with thousands separators, keeping its fraction.
pub fn format_number(n: f64) -> String {
    let text = n.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };
    let sign = if n < 0.0 { "-" } else { "" };
    match fraction {
        Some(f) => format!("{sign}{}.{f}", group_thousands(&whole)),
        None => format!("{sign}{}", group_thousands(&whole)),
    }
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
