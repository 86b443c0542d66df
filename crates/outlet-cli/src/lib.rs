//! CLI library components for the outlet catalog.

pub mod commands;
pub mod logging;
pub mod output;
