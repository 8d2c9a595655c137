//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) when the configuration asks for
//! `Auto` and applies matching colors to the picker chrome.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Only the dialog chrome is themed; swatches always show the real colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for the focused field and key hints
    pub accent: Color,
    /// Error state color for status messages
    pub error: Color,
    /// Primary text content color
    pub text: Color,
    /// Muted text color for labels and help text
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Background of the focused field
    pub highlight_bg: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// Uses the `dark-light` crate; unspecified modes and detection errors
    /// fall back to the dark theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
