//! Table state engine
//!
//! Owns the presentation state of a data grid (sort, filter, column layout,
//! row selection, keyboard focus) over a record store, derives the
//! displayed rows from it and persists it across sessions.

pub mod config;
pub mod derive;
pub mod edit;
pub mod error;
pub mod focus;
pub mod format;
pub mod layout;
pub mod model;
pub mod persist;
pub mod query;
pub mod selection;
pub mod settings;
pub mod store;
pub mod totals;

mod engine;

pub use config::GridConfig;
pub use engine::*;
