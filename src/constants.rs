//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and environment variable names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Huepick";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "huepick";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "huepick";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "HUEPICK_CONFIG_DIR";

/// Environment variable holding the log filter; logging is off when unset.
pub const LOG_ENV: &str = "HUEPICK_LOG";

/// File name of the log written into the config directory.
pub const LOG_FILE_NAME: &str = "huepick.log";
