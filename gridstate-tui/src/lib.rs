//! Terminal front-end for the deals grid.

pub mod app;
pub mod deals;
pub mod paths;
pub mod render;
pub mod settings;
pub mod terminal;
