//! Data model types

mod column;
mod record;
pub mod types;
mod value;

pub use column::*;
pub use record::*;
pub use value::*;
