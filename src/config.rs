//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::DrawStyle;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme '{other}'. Expected auto, dark or light"),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        };
        f.write_str(name)
    }
}

/// How a chosen color is printed on stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `RRGGBB` / `AARRGGBB`
    #[default]
    Hex,
    /// `(R << 16) | (G << 8) | B`
    Decimal,
    /// `rgba(r, g, b, a)`
    Rgb,
    /// `hsb(h, s%, b%)`
    Hsb,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk,
    /// All representations as a JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| {
                anyhow::anyhow!(
                    "Invalid output format '{s}'. Expected hex, decimal, rgb, hsb, cmyk or json"
                )
            })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Decimal => "decimal",
            Self::Rgb => "rgb",
            Self::Hsb => "hsb",
            Self::Cmyk => "cmyk",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Channel the gradient slider controls when the picker opens
    #[serde(default)]
    pub draw_style: DrawStyle,
}

/// Output preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used to print the picked color
    #[serde(default)]
    pub format: OutputFormat,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/huepick/config.toml`
/// - macOS: `~/Library/Application Support/huepick/config.toml`
/// - Windows: `%APPDATA%\huepick\config.toml`
///
/// The directory can be overridden with the `HUEPICK_CONFIG_DIR` environment
/// variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `HUEPICK_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `huepick`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// JSON output is only meaningful for one-off commands; it is rejected as
    /// the stored default so the interactive picker always prints one line.
    pub fn validate(&self) -> Result<()> {
        if self.output.format == OutputFormat::Json {
            anyhow::bail!("Output format 'json' cannot be stored as the default format");
        }
        Ok(())
    }
}
