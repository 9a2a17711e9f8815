//! CLI library components for the thermal-cycle renamer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
