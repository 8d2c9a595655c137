//! RGBA color value with hex and decimal parsing and formatting.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value accepted by the decimal representation (`0xFFFFFF`).
pub const MAX_DECIMAL: u32 = 0x00FF_FFFF;

/// Color value with red, green, blue and alpha channels (0-255 each).
///
/// This is the authoritative value every other representation (HSB, CMYK,
/// hex, decimal) is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque red, the color a picker starts with when nothing is supplied.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a new `Rgba` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses a color from hex text.
    ///
    /// Accepts an optional leading `#` and surrounding whitespace, followed by
    /// 3 (`RGB`), 4 (`ARGB`), 6 (`RRGGBB`) or 8 (`AARRGGBB`) hex digits.
    /// Forms without an alpha component produce an opaque color.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#FF8000").unwrap(), Rgba::rgb(255, 128, 0));
    /// assert_eq!(Rgba::from_hex("f80").unwrap(), Rgba::rgb(255, 136, 0));
    /// assert_eq!(Rgba::from_hex("80FF0000").unwrap(), Rgba::new(255, 0, 0, 128));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not one of the accepted hex forms.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Only 0-9 and A-F are allowed");
        }

        let pair = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))
        };
        // Short forms double each digit: "F80" -> "FF8800"
        let nibble = |index: usize, name: &str| {
            pair(index..index + 1, name).map(|value| value * 17)
        };

        match digits.len() {
            3 => Ok(Self::rgb(
                nibble(0, "red")?,
                nibble(1, "green")?,
                nibble(2, "blue")?,
            )),
            4 => Ok(Self::new(
                nibble(1, "red")?,
                nibble(2, "green")?,
                nibble(3, "blue")?,
                nibble(0, "alpha")?,
            )),
            6 => Ok(Self::rgb(
                pair(0..2, "red")?,
                pair(2..4, "green")?,
                pair(4..6, "blue")?,
            )),
            8 => Ok(Self::new(
                pair(2..4, "red")?,
                pair(4..6, "green")?,
                pair(6..8, "blue")?,
                pair(0..2, "alpha")?,
            )),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected RGB, ARGB, RRGGBB or AARRGGBB"
            ),
        }
    }

    /// Returns true if the hex text carries its own alpha component.
    #[must_use]
    pub fn hex_has_alpha(hex: &str) -> bool {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        matches!(digits.len(), 4 | 8)
    }

    /// Formats the color as uppercase hex without a prefix.
    ///
    /// Opaque colors produce `RRGGBB`; translucent ones `AARRGGBB`.
    ///
    /// ```
    /// use huepick::models::Rgba;
    ///
    /// assert_eq!(Rgba::rgb(0, 128, 255).to_hex(), "0080FF");
    /// assert_eq!(Rgba::new(0, 128, 255, 16).to_hex(), "100080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parses a decimal color value `(R << 16) | (G << 8) | B`.
    ///
    /// The result is opaque; callers that track alpha separately apply it
    /// with [`Rgba::with_alpha`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not an integer in `0..=0xFFFFFF`.
    pub fn from_decimal(text: &str) -> Result<Self> {
        let text = text.trim();
        let value: u32 = text
            .parse()
            .with_context(|| format!("Invalid decimal color '{text}'"))?;

        if value > MAX_DECIMAL {
            anyhow::bail!("Decimal color {value} is out of range (0-{MAX_DECIMAL})");
        }

        Ok(Self::rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Returns the decimal representation `(R << 16) | (G << 8) | B`.
    #[must_use]
    pub const fn to_decimal(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses a color given on the command line: hex (with or without `#`) or
    /// a decimal value.
    ///
    /// Plain digit strings are read as decimal unless they are written with a
    /// `#` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither a hex nor a decimal color.
    pub fn parse_any(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if !trimmed.starts_with('#') && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Self::from_decimal(trimmed);
        }
        Self::from_hex(trimmed)
    }

    /// Largest absolute per-channel difference between two colors.
    #[must_use]
    pub fn channel_distance(&self, other: &Self) -> u8 {
        let diff = |a: u8, b: u8| a.abs_diff(b);
        diff(self.r, other.r)
            .max(diff(self.g, other.g))
            .max(diff(self.b, other.b))
            .max(diff(self.a, other.a))
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    ///
    /// Terminals have no alpha channel, so alpha is dropped.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Default for Rgba {
    /// Default color is opaque red.
    fn default() -> Self {
        Self::RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        assert_eq!(Rgba::from_hex("#FF0000").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_hex("00FF00").unwrap(), Rgba::rgb(0, 255, 0));
        assert_eq!(Rgba::from_hex("#0000ff").unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(Rgba::from_hex("  #FFFFFF  ").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_from_hex_short_and_alpha_forms() {
        assert_eq!(Rgba::from_hex("#abc").unwrap(), Rgba::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(
            Rgba::from_hex("8abc").unwrap(),
            Rgba::new(0xAA, 0xBB, 0xCC, 0x88)
        );
        assert_eq!(
            Rgba::from_hex("#7F102030").unwrap(),
            Rgba::new(0x10, 0x20, 0x30, 0x7F)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgba::from_hex("zzzzzz").is_err());
        assert!(Rgba::from_hex("#FFFFF").is_err());
        assert!(Rgba::from_hex("#FFFFFFFFF").is_err());
        assert!(Rgba::from_hex("GGGGGG").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#").is_err());
        assert!(Rgba::from_hex("+FFFFF").is_err());
    }

    #[test]
    fn test_hex_has_alpha() {
        assert!(Rgba::hex_has_alpha("#80FF0000"));
        assert!(Rgba::hex_has_alpha("8F00"));
        assert!(!Rgba::hex_has_alpha("FF0000"));
        assert!(!Rgba::hex_has_alpha("#F00"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(255, 0, 0).to_hex(), "FF0000");
        assert_eq!(Rgba::rgb(0, 0, 0).to_hex(), "000000");
        assert_eq!(Rgba::new(1, 2, 3, 0).to_hex(), "00010203");
    }

    #[test]
    fn test_hex_roundtrip_keeps_alpha() {
        let original = Rgba::new(123, 45, 67, 89);
        let parsed = Rgba::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(Rgba::rgb(255, 0, 0).to_decimal(), 16_711_680);
        assert_eq!(Rgba::rgb(0, 0, 255).to_decimal(), 255);
        assert_eq!(
            Rgba::from_decimal("16711680").unwrap(),
            Rgba::rgb(255, 0, 0)
        );
        assert_eq!(
            Rgba::from_decimal(" 65280 ").unwrap(),
            Rgba::rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_decimal_invalid() {
        assert!(Rgba::from_decimal("abc").is_err());
        assert!(Rgba::from_decimal("-1").is_err());
        assert!(Rgba::from_decimal("16777216").is_err());
        assert!(Rgba::from_decimal("").is_err());
    }

    #[test]
    fn test_parse_any() {
        assert_eq!(Rgba::parse_any("255").unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(Rgba::parse_any("#255").unwrap(), Rgba::rgb(0x22, 0x55, 0x55));
        assert_eq!(Rgba::parse_any("ff8000").unwrap(), Rgba::rgb(255, 128, 0));
        assert!(Rgba::parse_any("orange").is_err());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Rgba::default(), Rgba::RED);
        assert_eq!(Rgba::rgb(0, 128, 255).to_string(), "#0080FF");
    }

    #[test]
    fn test_channel_distance() {
        let a = Rgba::new(10, 20, 30, 255);
        let b = Rgba::new(12, 17, 30, 250);
        assert_eq!(a.channel_distance(&b), 5);
        assert_eq!(a.channel_distance(&a), 0);
    }
}
