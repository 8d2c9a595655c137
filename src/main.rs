//! Huepick - terminal color picker
//!
//! Opens an interactive picker with synchronized HSB, RGBA, CMYK, hex and
//! decimal fields and prints the chosen color, or converts colors headlessly.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use huepick::cli::{self, CliError, CliResult, ConfigArgs, ConvertArgs, ExitCode};
use huepick::config::{Config, OutputFormat};
use huepick::constants::{APP_BINARY_NAME, LOG_ENV, LOG_FILE_NAME};
use huepick::tui;

/// Huepick - terminal color picker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Starting color as hex (`#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`) or decimal
    #[arg(value_name = "COLOR")]
    color: Option<String>,

    /// Output format for the picked color (defaults to the configured format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every representation of a color
    Convert(ConvertArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let result = match &cli.command {
        Some(Commands::Convert(args)) => args.execute().map(|()| ExitCode::Success),
        Some(Commands::Config(args)) => args.execute().map(|()| ExitCode::Success),
        None => pick(cli.color.as_deref(), cli.format),
    };

    let code = match result {
        Ok(code) => code.code(),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            if e.kind == ExitCode::ValidationError {
                eprintln!("Run '{APP_BINARY_NAME} --help' for usage.");
            }
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Opens the picker and prints the result.
///
/// Cancelling prints the starting color, if there was one, and exits with
/// [`ExitCode::Cancelled`].
fn pick(color: Option<&str>, format: Option<OutputFormat>) -> CliResult<ExitCode> {
    let current = color.map(cli::parse_color_arg).transpose()?;
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let format = format.unwrap_or(config.output.format);

    let picked = tui::pick_color(current, &config)
        .map_err(|e| CliError::io(format!("Color picker failed: {e:#}")))?;

    match (picked, current) {
        (Some(color), _) => {
            println!("{}", cli::format_color(color, format)?);
            Ok(ExitCode::Success)
        }
        (None, Some(original)) => {
            println!("{}", cli::format_color(original, format)?);
            Ok(ExitCode::Cancelled)
        }
        (None, None) => Ok(ExitCode::Cancelled),
    }
}

/// Sends `tracing` output to the log file when `HUEPICK_LOG` is set.
///
/// The terminal belongs to the picker, so nothing is logged to stderr.
fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let dir = Config::config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_new(&filter)
        .with_context(|| format!("Invalid {LOG_ENV} filter '{filter}'"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
