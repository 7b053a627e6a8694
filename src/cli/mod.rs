//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;

pub use commands::{handle_config_command, handle_init, handle_scan, ConfigSubcommand};
pub use logging::*;
