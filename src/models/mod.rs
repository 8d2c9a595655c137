//! Color data models.
//!
//! This module contains the color spaces, the synchronized color model used
//! by the picker, the preview bitmap and the gradient box/slider math.
//! Models are independent of the terminal UI.

pub mod cmyk;
pub mod color;
pub mod color_model;
pub mod gradient;
pub mod hsb;
pub mod preview;

// Re-export all model types
pub use cmyk::Cmyk;
pub use color::Rgba;
pub use color_model::{ColorFields, ColorModel, ColorType};
pub use gradient::{DrawStyle, GradientColor};
pub use hsb::Hsb;
pub use preview::{Bitmap, PreviewBand, PreviewRenderer};
