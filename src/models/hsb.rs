//! Hue / saturation / brightness color space.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSB conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};

use super::Rgba;

/// A color in HSB (also known as HSV) form.
///
/// Hue is in degrees `[0, 360)`, saturation and brightness are fractions
/// in `[0, 1]`. Alpha is carried unchanged through conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue in degrees (0.0-360.0, 0.0 for grayscale)
    pub hue: f64,
    /// Saturation (0.0-1.0)
    pub saturation: f64,
    /// Brightness / value (0.0-1.0)
    pub brightness: f64,
    /// Alpha channel (0-255)
    pub alpha: u8,
}

impl Hsb {
    /// Creates an HSB color, clamping every component into range.
    ///
    /// Hue wraps around, so 360 and 720 are both red.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: u8) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            brightness: brightness.clamp(0.0, 1.0),
            alpha,
        }
    }

    /// Creates an HSB color from the integer display form used by the picker
    /// fields (hue 0-359, saturation and brightness 0-100).
    #[must_use]
    pub fn from_display(hue: u16, saturation: u8, brightness: u8, alpha: u8) -> Self {
        Self::new(
            f64::from(hue),
            f64::from(saturation) / 100.0,
            f64::from(brightness) / 100.0,
            alpha,
        )
    }

    /// Converts an RGBA color to HSB.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{Hsb, Rgba};
    ///
    /// let hsb = Hsb::from_color(Rgba::rgb(0, 255, 0));
    /// assert!((hsb.hue - 120.0).abs() < 0.01);
    /// assert!((hsb.saturation - 1.0).abs() < 0.01);
    /// assert!((hsb.brightness - 1.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSB color model uses single-char names
    pub fn from_color(color: Rgba) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        Self {
            hue: if hue < 0.0 { hue + 360.0 } else { hue },
            saturation,
            brightness: max,
            alpha: color.a,
        }
    }

    /// Converts back to an RGBA color.
    ///
    /// ```
    /// use huepick::models::{Hsb, Rgba};
    ///
    /// assert_eq!(Hsb::new(240.0, 1.0, 1.0, 255).to_color(), Rgba::rgb(0, 0, 255));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSB color model uses single-char names
    pub fn to_color(&self) -> Rgba {
        let h = self.hue.rem_euclid(360.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let c = v * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgba::new(
            to_channel(r + m),
            to_channel(g + m),
            to_channel(b + m),
            self.alpha,
        )
    }

    /// Hue rounded for display, 0-359. A hue that rounds to 360 is 0.
    #[must_use]
    pub fn hue360(&self) -> u16 {
        (self.hue.round() as u16) % 360
    }

    /// Saturation as a rounded percentage (0-100).
    #[must_use]
    pub fn saturation100(&self) -> u8 {
        percent(self.saturation)
    }

    /// Brightness as a rounded percentage (0-100).
    #[must_use]
    pub fn brightness100(&self) -> u8 {
        percent(self.brightness)
    }
}

impl From<Rgba> for Hsb {
    fn from(color: Rgba) -> Self {
        Self::from_color(color)
    }
}

/// Scales a 0.0-1.0 fraction to a 0-255 channel.
pub(crate) fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Rounds a 0.0-1.0 fraction to a 0-100 percentage.
pub(crate) fn percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}
