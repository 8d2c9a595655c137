//! Old/new color preview bitmap.

use super::{ColorModel, Rgba};

/// A simple row-major pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Creates a bitmap filled with one color.
    #[must_use]
    pub fn filled(width: u16, height: u16, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; usize::from(width) * usize::from(height)],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }

    /// Fills rows `top..bottom` with `color`.
    fn fill_rows(&mut self, top: u16, bottom: u16, color: Rgba) {
        let width = usize::from(self.width);
        let start = usize::from(top) * width;
        let end = usize::from(bottom.min(self.height)) * width;
        if start < end {
            self.pixels[start..end].fill(color);
        }
    }
}

/// Which band of the preview a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewBand {
    /// The color the picker was opened with (top half)
    Old,
    /// The color being edited
    New,
}

/// Renders the old/new color preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewRenderer {
    old: Option<Rgba>,
    new: Rgba,
}

impl PreviewRenderer {
    /// Creates a renderer for explicit colors.
    #[must_use]
    pub const fn new(old: Option<Rgba>, new: Rgba) -> Self {
        Self { old, new }
    }

    /// Creates a renderer for the model's current state.
    #[must_use]
    pub const fn for_model(model: &ColorModel) -> Self {
        Self::new(model.old_color(), model.color())
    }

    /// Renders a `width` x `height` bitmap.
    ///
    /// With an old color the top `height / 2` rows show it and the remaining
    /// rows show the new color; otherwise the new color fills everything.
    #[must_use]
    pub fn render(&self, width: u16, height: u16) -> Bitmap {
        let mut bitmap = Bitmap::filled(width, height, self.new);
        if let Some(old) = self.old {
            bitmap.fill_rows(0, height / 2, old);
        }
        bitmap
    }

    /// Band of row `y` in a preview `height` rows tall.
    ///
    /// Rows outside the preview return `None`.
    #[must_use]
    pub fn band_at(&self, y: u16, height: u16) -> Option<PreviewBand> {
        if y >= height {
            return None;
        }
        if self.old.is_some() && y < height / 2 {
            Some(PreviewBand::Old)
        } else {
            Some(PreviewBand::New)
        }
    }
}
