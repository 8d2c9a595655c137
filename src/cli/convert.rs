//! `huepick convert`: print every representation of a color.

use clap::Args;

use crate::cli::common::CliResult;
use crate::cli::format::{format_color, parse_color_arg, ColorReport};
use crate::config::OutputFormat;

/// Convert a color between representations
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Color as hex (`#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`) or decimal
    #[arg(value_name = "COLOR", allow_hyphen_values = true)]
    color: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ConvertArgs {
    /// Execute convert command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color_arg(&self.color)?;
        tracing::debug!(input = %self.color, %color, "converting color");

        if self.json {
            println!("{}", format_color(color, OutputFormat::Json)?);
        } else {
            output_human_readable(&ColorReport::new(color));
        }

        Ok(())
    }
}

fn output_human_readable(report: &ColorReport) {
    println!("Hex:     {}", report.hex);
    println!("Decimal: {}", report.decimal);
    println!("RGBA:    {}", report.rgb_text());
    println!("HSB:     {}", report.hsb_text());
    println!("CMYK:    {}", report.cmyk_text());
}
