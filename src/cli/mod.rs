//! CLI command handlers for Huepick.
//!
//! This module provides headless, scriptable access to color conversion and
//! configuration, plus the output formatting used after an interactive pick.

pub mod common;
pub mod config;
pub mod convert;
pub mod format;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use format::{format_color, parse_color_arg, ColorReport};
