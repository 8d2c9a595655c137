//! Component trait pattern for TUI components.
//!
//! Components are self-contained, testable UI elements that handle their own
//! input and rendering and report outcomes to the caller through events.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::models::Rgba;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Handle mouse input.
    ///
    /// `area` is the area the component was last rendered into, so hit tests
    /// match what is on screen. Default implementation ignores the mouse.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _area: Rect) -> Option<Self::Event> {
        None
    }

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    ///
    /// Default implementation returns `false`.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by the color picker dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User confirmed a color
    ColorSelected(Rgba),

    /// User cancelled without making changes
    Cancelled,
}
