//! Error types

mod edit;
mod layout;
mod settings;
mod store;

pub use edit::*;
pub use layout::*;
pub use settings::*;
pub use store::*;
