//! Huepick Library
//!
//! This library provides the color models behind the Huepick picker
//! (RGBA, HSB, CMYK, hex and decimal kept in sync), the gradient and preview
//! rendering, and the terminal dialog built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod tui;
