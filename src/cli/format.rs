//! Printing colors in the supported output formats.

use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::config::OutputFormat;
use crate::models::{ColorFields, Rgba};

/// Every representation of a color, as printed by `--json`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorReport {
    /// `RRGGBB` or `AARRGGBB`
    pub hex: String,
    /// `(R << 16) | (G << 8) | B`
    pub decimal: u32,
    /// Channels 0-255
    pub rgba: RgbaOutput,
    /// Hue in degrees, the rest in percent
    pub hsb: HsbOutput,
    /// Percentages
    pub cmyk: CmykOutput,
}

/// RGBA channels.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RgbaOutput {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

/// HSB display values.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HsbOutput {
    /// Hue (0-359)
    pub hue: u16,
    /// Saturation (0-100)
    pub saturation: u8,
    /// Brightness (0-100)
    pub brightness: u8,
}

/// CMYK display values.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CmykOutput {
    /// Cyan (0-100)
    pub cyan: u8,
    /// Magenta (0-100)
    pub magenta: u8,
    /// Yellow (0-100)
    pub yellow: u8,
    /// Key (0-100)
    pub key: u8,
}

impl ColorReport {
    /// Builds the report from the same display fields the picker shows.
    #[must_use]
    pub fn new(color: Rgba) -> Self {
        let fields = ColorFields::from_color(color);
        Self {
            hex: fields.hex,
            decimal: color.to_decimal(),
            rgba: RgbaOutput {
                r: fields.red,
                g: fields.green,
                b: fields.blue,
                a: fields.alpha,
            },
            hsb: HsbOutput {
                hue: fields.hue,
                saturation: fields.saturation,
                brightness: fields.brightness,
            },
            cmyk: CmykOutput {
                cyan: fields.cyan,
                magenta: fields.magenta,
                yellow: fields.yellow,
                key: fields.key,
            },
        }
    }

    /// `rgba(r, g, b, a)`
    #[must_use]
    pub fn rgb_text(&self) -> String {
        let RgbaOutput { r, g, b, a } = self.rgba;
        format!("rgba({r}, {g}, {b}, {a})")
    }

    /// `hsb(h, s%, b%)`
    #[must_use]
    pub fn hsb_text(&self) -> String {
        let HsbOutput {
            hue,
            saturation,
            brightness,
        } = self.hsb;
        format!("hsb({hue}, {saturation}%, {brightness}%)")
    }

    /// `cmyk(c%, m%, y%, k%)`
    #[must_use]
    pub fn cmyk_text(&self) -> String {
        let CmykOutput {
            cyan,
            magenta,
            yellow,
            key,
        } = self.cmyk;
        format!("cmyk({cyan}%, {magenta}%, {yellow}%, {key}%)")
    }
}

/// Formats `color` for stdout.
pub fn format_color(color: Rgba, format: OutputFormat) -> CliResult<String> {
    let report = ColorReport::new(color);
    let text = match format {
        OutputFormat::Hex => report.hex,
        OutputFormat::Decimal => report.decimal.to_string(),
        OutputFormat::Rgb => report.rgb_text(),
        OutputFormat::Hsb => report.hsb_text(),
        OutputFormat::Cmyk => report.cmyk_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::io(format!("Failed to serialize color to JSON: {e}")))?,
    };
    Ok(text)
}

/// Parses a color argument in any hex or decimal form.
pub fn parse_color_arg(text: &str) -> CliResult<Rgba> {
    Rgba::parse_any(text).map_err(|e| CliError::validation(format!("{e:#}")))
}
