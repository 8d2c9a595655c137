//! Synchronized color representations.
//!
//! [`ColorModel`] holds one authoritative [`Rgba`] value and the five field
//! representations a picker shows for it (HSB, RGBA, CMYK, hex, decimal).
//! Every edit names the representation it came from; the model recomputes
//! the color and refreshes every *other* representation, so the field being
//! typed into is never clobbered.

use super::{Cmyk, Hsb, Rgba};

/// Which representation an edit originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Hue / saturation / brightness fields
    Hsb,
    /// Red / green / blue / alpha fields
    Rgba,
    /// Cyan / magenta / yellow / key fields
    Cmyk,
    /// Hex text field
    Hex,
    /// Decimal text field
    Decimal,
}

/// Display values of every picker field.
///
/// HSB and CMYK values are rounded to whole numbers, the way they are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFields {
    /// Hue in degrees (0-359)
    pub hue: u16,
    /// Saturation percentage (0-100)
    pub saturation: u8,
    /// Brightness percentage (0-100)
    pub brightness: u8,
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
    /// Alpha channel (0-255)
    pub alpha: u8,
    /// Cyan percentage (0-100)
    pub cyan: u8,
    /// Magenta percentage (0-100)
    pub magenta: u8,
    /// Yellow percentage (0-100)
    pub yellow: u8,
    /// Key percentage (0-100)
    pub key: u8,
    /// Hex text
    pub hex: String,
    /// Decimal text
    pub decimal: String,
}

impl ColorFields {
    /// Computes every field from a color.
    #[must_use]
    pub fn from_color(color: Rgba) -> Self {
        let mut fields = Self {
            hue: 0,
            saturation: 0,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
            cyan: 0,
            magenta: 0,
            yellow: 0,
            key: 0,
            hex: String::new(),
            decimal: String::new(),
        };
        fields.refresh(color, None);
        fields
    }

    /// Rewrites every field group except `skip` from `color`.
    fn refresh(&mut self, color: Rgba, skip: Option<ColorType>) {
        if skip != Some(ColorType::Hsb) {
            let hsb = Hsb::from_color(color);
            self.hue = hsb.hue360();
            self.saturation = hsb.saturation100();
            self.brightness = hsb.brightness100();
        }

        if skip != Some(ColorType::Rgba) {
            self.red = color.r;
            self.green = color.g;
            self.blue = color.b;
            self.alpha = color.a;
        }

        if skip != Some(ColorType::Cmyk) {
            let cmyk = Cmyk::from_color(color);
            self.cyan = cmyk.cyan100();
            self.magenta = cmyk.magenta100();
            self.yellow = cmyk.yellow100();
            self.key = cmyk.key100();
        }

        if skip != Some(ColorType::Hex) {
            self.hex = color.to_hex();
        }

        if skip != Some(ColorType::Decimal) {
            self.decimal = color.to_decimal().to_string();
        }
    }

    /// Re-derives a color from one field group.
    ///
    /// Text groups return `None` when their text does not parse.
    #[must_use]
    pub fn derive(&self, group: ColorType) -> Option<Rgba> {
        match group {
            ColorType::Hsb => Some(
                Hsb::from_display(self.hue, self.saturation, self.brightness, self.alpha)
                    .to_color(),
            ),
            ColorType::Rgba => Some(Rgba::new(self.red, self.green, self.blue, self.alpha)),
            ColorType::Cmyk => Some(
                Cmyk::from_percentages(self.cyan, self.magenta, self.yellow, self.key, self.alpha)
                    .to_color(),
            ),
            ColorType::Hex => parse_hex(&self.hex, self.alpha),
            ColorType::Decimal => parse_decimal(&self.decimal, self.alpha),
        }
    }
}

/// Parses hex field text. Forms without alpha keep `alpha`.
#[must_use]
pub fn parse_hex(text: &str, alpha: u8) -> Option<Rgba> {
    let color = Rgba::from_hex(text).ok()?;
    if Rgba::hex_has_alpha(text) {
        Some(color)
    } else {
        Some(color.with_alpha(alpha))
    }
}

/// Parses decimal field text, keeping `alpha`.
#[must_use]
pub fn parse_decimal(text: &str, alpha: u8) -> Option<Rgba> {
    Rgba::from_decimal(text)
        .ok()
        .map(|color| color.with_alpha(alpha))
}

/// The authoritative color plus its synchronized field representations.
#[derive(Debug, Clone)]
pub struct ColorModel {
    color: Rgba,
    old_color: Option<Rgba>,
    fields: ColorFields,
    /// Set while fields are being rewritten programmatically
    refreshing: bool,
    /// Alpha before the current run of hex edits began
    hex_alpha: Option<u8>,
}

impl ColorModel {
    /// Creates a model for a picker.
    ///
    /// With `Some(current)` the model starts at that color and remembers it
    /// as the old color. With `None` it starts at opaque red and has no old
    /// color.
    #[must_use]
    pub fn new(current: Option<Rgba>) -> Self {
        let color = current.unwrap_or(Rgba::RED);
        Self {
            color,
            old_color: current,
            fields: ColorFields::from_color(color),
            refreshing: false,
            hex_alpha: None,
        }
    }

    /// The current color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// The color the picker was opened with, if any.
    #[must_use]
    pub const fn old_color(&self) -> Option<Rgba> {
        self.old_color
    }

    /// Current display values of every field.
    #[must_use]
    pub const fn fields(&self) -> &ColorFields {
        &self.fields
    }

    /// True while a programmatic refresh is rewriting the fields.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Sets the color and refreshes every representation except `origin`.
    ///
    /// `None` refreshes all of them.
    pub fn change_color(&mut self, color: Rgba, origin: Option<ColorType>) {
        if origin != Some(ColorType::Hex) {
            self.hex_alpha = None;
        }
        self.color = color;
        self.refreshing = true;
        self.fields.refresh(color, origin);
        self.refreshing = false;
        tracing::trace!(color = %color, ?origin, "color changed");
    }

    /// Applies an edit of the HSB fields.
    pub fn set_hsb(&mut self, hue: u16, saturation: u8, brightness: u8) {
        if self.refreshing {
            return;
        }
        self.fields.hue = hue.min(359);
        self.fields.saturation = saturation.min(100);
        self.fields.brightness = brightness.min(100);
        if let Some(color) = self.fields.derive(ColorType::Hsb) {
            self.change_color(color, Some(ColorType::Hsb));
        }
    }

    /// Applies an edit of the RGBA fields.
    pub fn set_rgba(&mut self, color: Rgba) {
        if self.refreshing {
            return;
        }
        self.fields.red = color.r;
        self.fields.green = color.g;
        self.fields.blue = color.b;
        self.fields.alpha = color.a;
        self.change_color(color, Some(ColorType::Rgba));
    }

    /// Applies an edit of the alpha field alone.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.set_rgba(self.color.with_alpha(alpha));
    }

    /// Applies an edit of the CMYK fields (percentages).
    pub fn set_cmyk(&mut self, cyan: u8, magenta: u8, yellow: u8, key: u8) {
        if self.refreshing {
            return;
        }
        self.fields.cyan = cyan.min(100);
        self.fields.magenta = magenta.min(100);
        self.fields.yellow = yellow.min(100);
        self.fields.key = key.min(100);
        if let Some(color) = self.fields.derive(ColorType::Cmyk) {
            self.change_color(color, Some(ColorType::Cmyk));
        }
    }

    /// Applies an edit of the hex text.
    ///
    /// The text is kept as typed. Forms without alpha use the alpha the color
    /// had before the hex text was first edited. Returns true if it parsed and the color
    /// changed; malformed text leaves the color untouched.
    pub fn set_hex(&mut self, text: &str) -> bool {
        if self.refreshing {
            return false;
        }
        self.fields.hex = text.to_string();
        // Text typed digit by digit passes through the ARGB short form, so
        // six digit input keeps the alpha from before the run of hex edits
        let alpha = *self.hex_alpha.get_or_insert(self.color.a);
        match parse_hex(text, alpha) {
            Some(color) => {
                self.change_color(color, Some(ColorType::Hex));
                true
            }
            None => false,
        }
    }

    /// Applies an edit of the decimal text.
    ///
    /// The text is kept as typed. Returns true if it parsed and the color
    /// changed; malformed text leaves the color untouched.
    pub fn set_decimal(&mut self, text: &str) -> bool {
        if self.refreshing {
            return false;
        }
        self.fields.decimal = text.to_string();
        match parse_decimal(text, self.color.a) {
            Some(color) => {
                self.change_color(color, Some(ColorType::Decimal));
                true
            }
            None => false,
        }
    }

    /// Resets the current color to the old color, refreshing every field.
    ///
    /// Returns false when the picker was opened without an old color.
    pub fn reset_to_old(&mut self) -> bool {
        match self.old_color {
            Some(old) => {
                self.change_color(old, None);
                true
            }
            None => false,
        }
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(None)
    }
}
