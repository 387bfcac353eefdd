//! CLI library components for the translation sheet tooling.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
