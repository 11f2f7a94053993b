//! Column layout error types

use thiserror::Error;

/// Errors raised when a layout change is rejected.
///
/// A rejected change leaves the previous layout untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The proposed column order is not a permutation of the known column ids.
    #[error("invalid column order: {0}")]
    InvalidOrder(OrderViolation),
}

/// Describes how a proposed column order differs from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderViolation {
    /// Known column ids that were absent from the proposed order.
    pub missing: Vec<String>,
    /// Ids in the proposed order that the registry does not know.
    pub unknown: Vec<String>,
    /// Ids that appeared more than once.
    pub duplicated: Vec<String>,
}

impl OrderViolation {
    /// Returns `true` if no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty() && self.duplicated.is_empty()
    }
}

impl std::fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing [{}]", self.missing.join(", ")));
        }
        if !self.unknown.is_empty() {
            parts.push(format!("unknown [{}]", self.unknown.join(", ")));
        }
        if !self.duplicated.is_empty() {
            parts.push(format!("duplicated [{}]", self.duplicated.join(", ")));
        }
        write!(f, "{}", parts.join("; "))
    }
}
