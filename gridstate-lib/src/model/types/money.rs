//! Money type

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary value represented as a decimal.
///
/// The grid displays every currency column in a single currency, so no
/// currency code is carried alongside the amount.
///
/// # Example
///
/// ```
/// use gridstate_lib::model::types::Money;
/// use rust_decimal::Decimal;
///
/// let price = Money::new(Decimal::new(1999, 2)); // 19.99
/// let deal = Money::from_int(125_000);
/// assert!(deal > price);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Creates a Money value from an integer (whole units).
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Shortest decimal form, without trailing zeros (`1500`, `19.9`).
    pub fn canonical(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
