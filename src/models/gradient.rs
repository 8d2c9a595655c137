//! Two-dimensional color box and one-dimensional slider.
//!
//! A [`DrawStyle`] picks the channel the slider controls; the box spans the
//! remaining two. All coordinates are normalized to `[0, 1]` with `0` at the
//! left/top, and the top of the box and slider is the channel maximum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hsb::to_channel;
use super::{Hsb, Rgba};

/// Channel controlled by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    /// Slider picks hue; box is saturation (x) by brightness (y)
    Hue,
    /// Slider picks saturation; box is hue (x) by brightness (y)
    #[default]
    Saturation,
    /// Slider picks brightness; box is hue (x) by saturation (y)
    Brightness,
    /// Slider picks red; box is blue (x) by green (y)
    Red,
    /// Slider picks green; box is blue (x) by red (y)
    Green,
    /// Slider picks blue; box is red (x) by green (y)
    Blue,
}

impl DrawStyle {
    /// All styles in display order.
    pub const ALL: [Self; 6] = [
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Short label for the slider.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Hue => "H",
            Self::Saturation => "S",
            Self::Brightness => "B",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }

    /// Style selected by the 1-6 shortcut keys.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid draw style '{s}'. Expected hue, saturation, brightness, red, green or blue"
                )
            })
    }
}

/// A color as the box and slider see it.
///
/// Keeps an HSB form next to the exact RGBA so that hue and saturation
/// survive picks through black or gray, where the RGBA no longer defines them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColor {
    /// Exact color
    pub color: Rgba,
    /// HSB form of `color`, possibly carrying a hue or saturation it lost
    pub hsb: Hsb,
}

impl GradientColor {
    /// Derives the HSB form from `color`.
    #[must_use]
    pub fn from_color(color: Rgba) -> Self {
        Self {
            color,
            hsb: Hsb::from_color(color),
        }
    }

    /// Uses `hsb` as given; the color is derived from it.
    #[must_use]
    pub fn from_hsb(hsb: Hsb) -> Self {
        Self {
            color: hsb.to_color(),
            hsb,
        }
    }

    /// An RGB pick that keeps the hue and saturation of `previous` where
    /// `color` has none of its own.
    fn from_rgb_pick(color: Rgba, previous: Hsb) -> Self {
        let mut hsb = Hsb::from_color(color);
        if hsb.brightness <= 0.0 {
            hsb.hue = previous.hue;
            hsb.saturation = previous.saturation;
        } else if hsb.saturation <= 0.0 {
            hsb.hue = previous.hue;
        }
        Self { color, hsb }
    }
}

impl From<Rgba> for GradientColor {
    fn from(color: Rgba) -> Self {
        Self::from_color(color)
    }
}

/// Color picked at `(x, y)` in the box. The slider channel and alpha come
/// from `base`.
#[must_use]
pub fn box_color(style: DrawStyle, base: GradientColor, x: f64, y: f64) -> GradientColor {
    let x = x.clamp(0.0, 1.0);
    let top = 1.0 - y.clamp(0.0, 1.0);
    let GradientColor { color, hsb } = base;

    let rgb = match style {
        DrawStyle::Hue => {
            return GradientColor::from_hsb(Hsb::new(hsb.hue, x, top, color.a));
        }
        DrawStyle::Saturation => {
            return GradientColor::from_hsb(Hsb::new(x * 360.0, hsb.saturation, top, color.a));
        }
        DrawStyle::Brightness => {
            return GradientColor::from_hsb(Hsb::new(x * 360.0, top, hsb.brightness, color.a));
        }
        DrawStyle::Red => Rgba::new(color.r, to_channel(top), to_channel(x), color.a),
        DrawStyle::Green => Rgba::new(to_channel(top), color.g, to_channel(x), color.a),
        DrawStyle::Blue => Rgba::new(to_channel(x), to_channel(top), color.b, color.a),
    };
    GradientColor::from_rgb_pick(rgb, hsb)
}

/// Color picked at position `t` on the slider. The box channels and alpha
/// come from `base`.
#[must_use]
pub fn slider_color(style: DrawStyle, base: GradientColor, t: f64) -> GradientColor {
    let value = 1.0 - t.clamp(0.0, 1.0);
    let GradientColor { color, hsb } = base;

    let rgb = match style {
        DrawStyle::Hue => {
            return GradientColor::from_hsb(Hsb::new(
                value * 360.0,
                hsb.saturation,
                hsb.brightness,
                color.a,
            ));
        }
        DrawStyle::Saturation => {
            return GradientColor::from_hsb(Hsb::new(hsb.hue, value, hsb.brightness, color.a));
        }
        DrawStyle::Brightness => {
            return GradientColor::from_hsb(Hsb::new(hsb.hue, hsb.saturation, value, color.a));
        }
        DrawStyle::Red => Rgba {
            r: to_channel(value),
            ..color
        },
        DrawStyle::Green => Rgba {
            g: to_channel(value),
            ..color
        },
        DrawStyle::Blue => Rgba {
            b: to_channel(value),
            ..color
        },
    };
    GradientColor::from_rgb_pick(rgb, hsb)
}

/// Color shown at position `t` on the slider.
///
/// Identical to [`slider_color`] except for the hue slider, which shows
/// fully saturated hues so the strip stays readable for gray bases.
#[must_use]
pub fn slider_swatch(style: DrawStyle, base: GradientColor, t: f64) -> Rgba {
    match style {
        DrawStyle::Hue => {
            Hsb::new((1.0 - t.clamp(0.0, 1.0)) * 360.0, 1.0, 1.0, base.color.a).to_color()
        }
        _ => slider_color(style, base, t).color,
    }
}

/// Box position `(x, y)` of `base`.
#[must_use]
pub fn box_position(style: DrawStyle, base: GradientColor) -> (f64, f64) {
    let GradientColor { color, hsb } = base;
    let unit = |channel: u8| f64::from(channel) / 255.0;

    match style {
        DrawStyle::Hue => (hsb.saturation, 1.0 - hsb.brightness),
        DrawStyle::Saturation => (hsb.hue / 360.0, 1.0 - hsb.brightness),
        DrawStyle::Brightness => (hsb.hue / 360.0, 1.0 - hsb.saturation),
        DrawStyle::Red => (unit(color.b), 1.0 - unit(color.g)),
        DrawStyle::Green => (unit(color.b), 1.0 - unit(color.r)),
        DrawStyle::Blue => (unit(color.r), 1.0 - unit(color.g)),
    }
}

/// Slider position of `base`.
#[must_use]
pub fn slider_position(style: DrawStyle, base: GradientColor) -> f64 {
    let GradientColor { color, hsb } = base;
    let unit = |channel: u8| f64::from(channel) / 255.0;

    1.0 - match style {
        DrawStyle::Hue => hsb.hue / 360.0,
        DrawStyle::Saturation => hsb.saturation,
        DrawStyle::Brightness => hsb.brightness,
        DrawStyle::Red => unit(color.r),
        DrawStyle::Green => unit(color.g),
        DrawStyle::Blue => unit(color.b),
    }
}

/// Normalized coordinate of cell `index` in a strip of `len` cells.
#[must_use]
pub fn cell_fraction(index: u16, len: u16) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    f64::from(index.min(len - 1)) / f64::from(len - 1)
}

/// Cell index nearest to a normalized coordinate in a strip of `len` cells.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_index(fraction: f64, len: u16) -> u16 {
    if len <= 1 {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * f64::from(len - 1)).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgba; 4] = [
        Rgba::new(12, 200, 99, 255),
        Rgba::new(255, 0, 128, 40),
        Rgba::new(0, 0, 0, 255),
        Rgba::new(90, 90, 91, 255),
    ];

    fn pick_box(style: DrawStyle, base: Rgba, x: f64, y: f64) -> Rgba {
        box_color(style, base.into(), x, y).color
    }

    fn pick_slider(style: DrawStyle, base: Rgba, t: f64) -> Rgba {
        slider_color(style, base.into(), t).color
    }

    #[test]
    fn test_rgb_styles_roundtrip_exactly() {
        for style in [DrawStyle::Red, DrawStyle::Green, DrawStyle::Blue] {
            for color in SAMPLES {
                let (x, y) = box_position(style, color.into());
                assert_eq!(pick_box(style, color, x, y), color, "{style} box");

                let t = slider_position(style, color.into());
                assert_eq!(pick_slider(style, color, t), color, "{style} slider");
            }
        }
    }

    #[test]
    fn test_hsb_styles_roundtrip_within_one() {
        for style in [DrawStyle::Hue, DrawStyle::Saturation, DrawStyle::Brightness] {
            for color in SAMPLES {
                let (x, y) = box_position(style, color.into());
                let picked = pick_box(style, color, x, y);
                assert!(color.channel_distance(&picked) <= 1, "{style}: {picked}");

                let t = slider_position(style, color.into());
                let picked = pick_slider(style, color, t);
                assert!(color.channel_distance(&picked) <= 1, "{style}: {picked}");
            }
        }
    }

    #[test]
    fn test_box_corners_in_red_style() {
        let base = Rgba::rgb(10, 0, 0);
        assert_eq!(pick_box(DrawStyle::Red, base, 0.0, 0.0), Rgba::rgb(10, 255, 0));
        assert_eq!(pick_box(DrawStyle::Red, base, 1.0, 1.0), Rgba::rgb(10, 0, 255));
        // Out-of-range coordinates clamp
        assert_eq!(pick_box(DrawStyle::Red, base, 3.0, -2.0), Rgba::rgb(10, 255, 255));
    }

    #[test]
    fn test_saturation_box_top_left_is_red() {
        assert_eq!(pick_box(DrawStyle::Saturation, Rgba::RED, 0.0, 0.0), Rgba::RED);
        assert_eq!(pick_box(DrawStyle::Saturation, Rgba::RED, 0.5, 1.0), Rgba::BLACK);
    }

    #[test]
    fn test_saturation_survives_black() {
        let black = box_color(DrawStyle::Saturation, Rgba::RED.into(), 0.0, 1.0);
        assert_eq!(black.color, Rgba::BLACK);
        assert!((black.hsb.saturation - 1.0).abs() < f64::EPSILON);

        let back = box_color(DrawStyle::Saturation, black, 0.0, 0.0);
        assert_eq!(back.color, Rgba::RED);
    }

    #[test]
    fn test_hue_survives_gray() {
        let white = box_color(DrawStyle::Hue, Rgba::RED.into(), 0.0, 0.0);
        assert_eq!(white.color, Rgba::WHITE);

        // Hue slider halfway is cyan, invisible while the color is white
        let still_white = slider_color(DrawStyle::Hue, white, 0.5);
        assert_eq!(still_white.color, Rgba::WHITE);
        assert!((still_white.hsb.hue - 180.0).abs() < 1e-9);
        assert!((slider_position(DrawStyle::Hue, still_white) - 0.5).abs() < 1e-9);

        let cyan = box_color(DrawStyle::Hue, still_white, 1.0, 0.0);
        assert_eq!(cyan.color, Rgba::rgb(0, 255, 255));
    }

    #[test]
    fn test_rgb_pick_keeps_hue_through_black() {
        let magenta = GradientColor::from_color(Rgba::rgb(255, 0, 255));
        // Green style keeps green at 0, so the bottom-left corner is black
        let black = box_color(DrawStyle::Green, magenta, 0.0, 1.0);
        assert_eq!(black.color, Rgba::BLACK);
        assert!((black.hsb.hue - 300.0).abs() < 1e-9);
        assert!((black.hsb.saturation - 1.0).abs() < 1e-9);
        assert_eq!(black.hsb.to_color(), black.color);
    }

    #[test]
    fn test_hue_slider_swatch_is_saturated() {
        let gray = Rgba::rgb(128, 128, 128);
        assert_eq!(slider_swatch(DrawStyle::Hue, gray.into(), 1.0), Rgba::RED);
        assert_eq!(pick_slider(DrawStyle::Hue, gray, 1.0), gray);
        assert_eq!(
            slider_swatch(DrawStyle::Red, gray.into(), 0.0),
            pick_slider(DrawStyle::Red, gray, 0.0)
        );
    }

    #[test]
    fn test_alpha_kept() {
        let base = Rgba::new(1, 2, 3, 7);
        for style in DrawStyle::ALL {
            assert_eq!(pick_box(style, base, 0.3, 0.3).a, 7);
            assert_eq!(pick_slider(style, base, 0.3).a, 7);
        }
    }

    #[test]
    fn test_style_names() {
        assert_eq!("Hue".parse::<DrawStyle>().unwrap(), DrawStyle::Hue);
        assert_eq!(" blue ".parse::<DrawStyle>().unwrap(), DrawStyle::Blue);
        assert!("purple".parse::<DrawStyle>().is_err());
        assert_eq!(DrawStyle::default(), DrawStyle::Saturation);
        assert_eq!(DrawStyle::from_shortcut('1'), Some(DrawStyle::Hue));
        assert_eq!(DrawStyle::from_shortcut('6'), Some(DrawStyle::Blue));
        assert_eq!(DrawStyle::from_shortcut('0'), None);
        assert_eq!(DrawStyle::from_shortcut('7'), None);
        assert_eq!(DrawStyle::from_shortcut('x'), None);
    }

    #[test]
    fn test_cell_mapping() {
        assert!((cell_fraction(0, 10) - 0.0).abs() < f64::EPSILON);
        assert!((cell_fraction(9, 10) - 1.0).abs() < f64::EPSILON);
        assert!((cell_fraction(5, 1) - 0.0).abs() < f64::EPSILON);
        assert_eq!(cell_index(1.0, 10), 9);
        assert_eq!(cell_index(0.5, 11), 5);
        assert_eq!(cell_index(-1.0, 10), 0);
        assert_eq!(cell_index(0.7, 0), 0);
        for i in 0..20 {
            assert_eq!(cell_index(cell_fraction(i, 20), 20), i);
        }
    }
}
