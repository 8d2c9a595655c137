//! Terminal user interface for the color picker.
//!
//! This module owns terminal setup and teardown and the event loop that
//! drives the [`ColorPickerState`] dialog.

pub mod color_picker;
pub mod component;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io;

use crate::config::Config;
use crate::models::Rgba;

// Re-export TUI components
pub use color_picker::{ColorPickerState, DialogLayout, Field};
pub use component::{Component, ComponentEvent};
pub use theme::Theme;

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the picker until the user confirms or cancels.
///
/// Events come from `next_event`, so the loop can be driven by a scripted
/// sequence in tests. Returns `Some(color)` on confirm and `None` on cancel.
pub fn run_picker<B: Backend>(
    terminal: &mut Terminal<B>,
    picker: &mut ColorPickerState,
    theme: &Theme,
    mut next_event: impl FnMut() -> Result<Event>,
) -> Result<Option<Rgba>> {
    loop {
        let mut area = Rect::default();
        terminal
            .draw(|f| {
                area = f.area();
                picker.render(f, area, theme);
            })
            .context("Failed to draw color picker")?;

        let outcome = match next_event()? {
            // Ignore key release events on platforms that report them
            Event::Key(key) if key.kind == KeyEventKind::Press => picker.handle_input(key),
            Event::Mouse(mouse) => picker.handle_mouse(mouse, area),
            _ => None,
        };

        match outcome {
            Some(ComponentEvent::ColorSelected(color)) => return Ok(Some(color)),
            Some(ComponentEvent::Cancelled) => return Ok(None),
            None if picker.should_close() => return Ok(None),
            None => {}
        }
    }
}

/// Runs `f` on the real terminal, restoring it even if `f` fails.
fn with_terminal<T>(
    f: impl FnOnce(&mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<T>,
) -> Result<T> {
    let mut terminal = setup_terminal()?;
    let result = f(&mut terminal);
    restore_terminal(terminal)?;
    result
}

fn read_event() -> Result<Event> {
    event::read().context("Failed to read terminal event")
}

/// Opens the picker configured by `config` on `terminal`.
///
/// Returns `Some(color)` when the user confirms and `None` when they cancel.
pub fn pick_color_with<B: Backend>(
    terminal: &mut Terminal<B>,
    current: Option<Rgba>,
    config: &Config,
    next_event: impl FnMut() -> Result<Event>,
) -> Result<Option<Rgba>> {
    let theme = Theme::from_mode(config.ui.theme_mode);
    let mut picker = ColorPickerState::new(current, config.ui.draw_style);

    tracing::info!(
        current = ?current.map(|c| c.to_hex()),
        draw_style = %config.ui.draw_style,
        "opening color picker"
    );

    run_picker(terminal, &mut picker, &theme, next_event)
}

/// Opens the picker on the real terminal.
///
/// Returns `Some(color)` when the user confirms and `None` when they cancel.
pub fn pick_color(current: Option<Rgba>, config: &Config) -> Result<Option<Rgba>> {
    with_terminal(|terminal| pick_color_with(terminal, current, config, read_event))
}

/// Shows the picker on `terminal` and returns the chosen color.
///
/// Cancelling returns `current` unchanged, or `None` if there was none.
pub fn get_color_with<B: Backend>(
    terminal: &mut Terminal<B>,
    current: Option<Rgba>,
    config: &Config,
    next_event: impl FnMut() -> Result<Event>,
) -> Result<Option<Rgba>> {
    Ok(pick_color_with(terminal, current, config, next_event)?.or(current))
}

/// Shows the picker on the real terminal and returns the chosen color.
///
/// Cancelling returns `current` unchanged, or `None` if there was none.
pub fn get_color(current: Option<Rgba>, config: &Config) -> Result<Option<Rgba>> {
    with_terminal(|terminal| get_color_with(terminal, current, config, read_event))
}
