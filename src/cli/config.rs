//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, OutputFormat, ThemeMode};
use crate::constants::APP_NAME;
use crate::models::DrawStyle;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Draw style the picker opens with (hue, saturation, brightness, red, green, blue)
    #[arg(long, value_name = "STYLE")]
    draw_style: Option<String>,

    /// Default output format (hex, decimal, rgb, hsb, or cmyk)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    draw_style: String,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    format: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_path_string()?);
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.draw_style.is_none() && self.format.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --draw-style, or --format",
            ));
        }

        // An unreadable file is replaced rather than blocking the update
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable configuration");
            Config::default()
        });

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(style) = &self.draw_style {
            config.ui.draw_style = style
                .parse::<DrawStyle>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(format) = &self.format {
            let format = format
                .parse::<OutputFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
            if format == OutputFormat::Json {
                return Err(CliError::validation(
                    "Output format 'json' cannot be stored as the default format",
                ));
            }
            config.output.format = format;
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn config_path_string() -> CliResult<String> {
    Config::config_file_path()
        .map(|path| path.display().to_string())
        .map_err(|e| CliError::io(format!("Failed to determine config path: {e:#}")))
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: config_path_string()?,
        ui: UiOutput {
            theme: config.ui.theme_mode.to_string(),
            draw_style: config.ui.draw_style.to_string(),
        },
        output: OutputOutput {
            format: config.output.format.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("File: {}", config_path_string()?);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!("  Draw Style: {}", config.ui.draw_style);
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format);
    println!();
    Ok(())
}
