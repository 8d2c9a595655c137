//! Subtractive cyan / magenta / yellow / key color space.

// Allow float comparisons against exact black
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};

use super::hsb::{percent, to_channel};
use super::Rgba;

/// A color in CMYK form. Components are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan (0.0-1.0)
    pub cyan: f64,
    /// Magenta (0.0-1.0)
    pub magenta: f64,
    /// Yellow (0.0-1.0)
    pub yellow: f64,
    /// Key / black (0.0-1.0)
    pub key: f64,
    /// Alpha channel (0-255)
    pub alpha: u8,
}

impl Cmyk {
    /// Creates a CMYK color, clamping every component into `[0, 1]`.
    #[must_use]
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64, alpha: u8) -> Self {
        Self {
            cyan: cyan.clamp(0.0, 1.0),
            magenta: magenta.clamp(0.0, 1.0),
            yellow: yellow.clamp(0.0, 1.0),
            key: key.clamp(0.0, 1.0),
            alpha,
        }
    }

    /// Creates a CMYK color from percentages (0-100) as shown in the picker.
    #[must_use]
    pub fn from_percentages(cyan: u8, magenta: u8, yellow: u8, key: u8, alpha: u8) -> Self {
        Self::new(
            f64::from(cyan) / 100.0,
            f64::from(magenta) / 100.0,
            f64::from(yellow) / 100.0,
            f64::from(key) / 100.0,
            alpha,
        )
    }

    /// Converts an RGBA color to CMYK.
    ///
    /// Pure black is `(0, 0, 0, 1)`.
    ///
    /// ```
    /// use huepick::models::{Cmyk, Rgba};
    ///
    /// let cmyk = Cmyk::from_color(Rgba::rgb(255, 0, 0));
    /// assert_eq!(cmyk.magenta100(), 100);
    /// assert_eq!(cmyk.key100(), 0);
    /// ```
    #[must_use]
    pub fn from_color(color: Rgba) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let key = 1.0 - r.max(g).max(b);
        if key == 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0, color.a);
        }

        let white = 1.0 - key;
        Self::new(
            (white - r) / white,
            (white - g) / white,
            (white - b) / white,
            key,
            color.a,
        )
    }

    /// Converts back to an RGBA color.
    #[must_use]
    pub fn to_color(&self) -> Rgba {
        let white = 1.0 - self.key;
        Rgba::new(
            to_channel((1.0 - self.cyan) * white),
            to_channel((1.0 - self.magenta) * white),
            to_channel((1.0 - self.yellow) * white),
            self.alpha,
        )
    }

    /// Cyan as a rounded percentage.
    #[must_use]
    pub fn cyan100(&self) -> u8 {
        percent(self.cyan)
    }

    /// Magenta as a rounded percentage.
    #[must_use]
    pub fn magenta100(&self) -> u8 {
        percent(self.magenta)
    }

    /// Yellow as a rounded percentage.
    #[must_use]
    pub fn yellow100(&self) -> u8 {
        percent(self.yellow)
    }

    /// Key as a rounded percentage.
    #[must_use]
    pub fn key100(&self) -> u8 {
        percent(self.key)
    }
}

impl From<Rgba> for Cmyk {
    fn from(color: Rgba) -> Self {
        Self::from_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let black = Cmyk::from_color(Rgba::BLACK);
        assert_eq!(black.key, 1.0);
        assert_eq!(black.cyan, 0.0);
        assert_eq!(black.to_color(), Rgba::BLACK);

        let white = Cmyk::from_color(Rgba::WHITE);
        assert_eq!(white.key, 0.0);
        assert_eq!(white.cyan100(), 0);
        assert_eq!(white.to_color(), Rgba::WHITE);
    }

    #[test]
    fn test_known_values() {
        // #336699 -> C 67 M 33 Y 0 K 40
        let cmyk = Cmyk::from_color(Rgba::rgb(0x33, 0x66, 0x99));
        assert_eq!(cmyk.cyan100(), 67);
        assert_eq!(cmyk.magenta100(), 33);
        assert_eq!(cmyk.yellow100(), 0);
        assert_eq!(cmyk.key100(), 40);

        assert_eq!(
            Cmyk::from_percentages(0, 100, 100, 0, 255).to_color(),
            Rgba::RED
        );
    }

    #[test]
    fn test_roundtrip_within_one() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let color = Rgba::new(r, g, b, 77);
                    let back = Cmyk::from_color(color).to_color();
                    assert!(
                        color.channel_distance(&back) <= 1,
                        "expected {color} got {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_clamping() {
        let cmyk = Cmyk::new(-1.0, 2.0, 0.5, 3.0, 255);
        assert_eq!(cmyk.cyan, 0.0);
        assert_eq!(cmyk.magenta, 1.0);
        assert_eq!(cmyk.key, 1.0);
        assert_eq!(cmyk.to_color(), Rgba::BLACK);
    }
}
