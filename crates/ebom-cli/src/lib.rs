//! CLI library components for the EBOM viewer.

pub mod catalog;
pub mod logging;
pub mod render;
pub mod repl;
