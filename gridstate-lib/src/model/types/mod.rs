//! Specialized field value types

mod money;

pub use money::*;
