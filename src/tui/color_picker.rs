//! Color picker dialog.
//!
//! Shows every representation of the color being edited side by side:
//! - A gradient box and slider driven by the selected draw style
//! - Numeric HSB, RGBA and CMYK fields
//! - Hex and decimal text fields
//! - An old/new preview; clicking the old half restores the old color
//!
//! All edits go through [`ColorModel`], which keeps the other fields in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::models::gradient::{self, cell_fraction, cell_index};
use crate::models::{
    Bitmap, ColorFields, ColorModel, DrawStyle, GradientColor, Hsb, PreviewBand,
    PreviewRenderer, Rgba,
};

/// Crosshair step for arrow keys in the box (Shift moves further).
const BOX_STEP: f64 = 0.02;
/// Marker step for Up/Down on the slider.
const SLIDER_STEP: f64 = 0.01;
/// Marker step for PageUp/PageDown on the slider.
const SLIDER_PAGE: f64 = 0.1;

/// Preferred dialog size; smaller terminals get the whole screen.
const DIALOG_WIDTH: u16 = 84;
const DIALOG_HEIGHT: u16 = 24;

/// A focusable element of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Gradient box
    ColorBox,
    /// Gradient slider
    Slider,
    /// Hue (0-359)
    Hue,
    /// Saturation (0-100)
    Saturation,
    /// Brightness (0-100)
    Brightness,
    /// Red (0-255)
    Red,
    /// Green (0-255)
    Green,
    /// Blue (0-255)
    Blue,
    /// Alpha (0-255)
    Alpha,
    /// Cyan (0-100)
    Cyan,
    /// Magenta (0-100)
    Magenta,
    /// Yellow (0-100)
    Yellow,
    /// Key (0-100)
    Key,
    /// Hex text
    Hex,
    /// Decimal text
    Decimal,
}

impl Field {
    /// Focus order for Tab.
    pub const ORDER: [Self; 15] = [
        Self::ColorBox,
        Self::Slider,
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Alpha,
        Self::Cyan,
        Self::Magenta,
        Self::Yellow,
        Self::Key,
        Self::Hex,
        Self::Decimal,
    ];

    /// Next field in focus order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Previous field in focus order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ColorBox => "Box",
            Self::Slider => "Slider",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Brightness => "Brightness",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Alpha => "Alpha",
            Self::Cyan => "Cyan",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::Key => "Key",
            Self::Hex => "Hex",
            Self::Decimal => "Decimal",
        }
    }

    /// Largest value of a numeric field, `None` for the others.
    #[must_use]
    pub const fn max(self) -> Option<u16> {
        match self {
            Self::Hue => Some(359),
            Self::Saturation
            | Self::Brightness
            | Self::Cyan
            | Self::Magenta
            | Self::Yellow
            | Self::Key => Some(100),
            Self::Red | Self::Green | Self::Blue | Self::Alpha => Some(255),
            Self::ColorBox | Self::Slider | Self::Hex | Self::Decimal => None,
        }
    }

    /// Unit suffix shown after numeric values.
    const fn unit(self) -> &'static str {
        match self {
            Self::Hue => "°",
            Self::Saturation
            | Self::Brightness
            | Self::Cyan
            | Self::Magenta
            | Self::Yellow
            | Self::Key => "%",
            _ => "",
        }
    }

    /// Current value of a numeric field.
    fn value(self, fields: &ColorFields) -> u16 {
        match self {
            Self::Hue => fields.hue,
            Self::Saturation => u16::from(fields.saturation),
            Self::Brightness => u16::from(fields.brightness),
            Self::Red => u16::from(fields.red),
            Self::Green => u16::from(fields.green),
            Self::Blue => u16::from(fields.blue),
            Self::Alpha => u16::from(fields.alpha),
            Self::Cyan => u16::from(fields.cyan),
            Self::Magenta => u16::from(fields.magenta),
            Self::Yellow => u16::from(fields.yellow),
            Self::Key => u16::from(fields.key),
            Self::ColorBox | Self::Slider | Self::Hex | Self::Decimal => 0,
        }
    }
}

/// Rows of the values panel; `None` is a blank separator line.
const FIELD_ROWS: [Option<Field>; 16] = [
    Some(Field::Hue),
    Some(Field::Saturation),
    Some(Field::Brightness),
    None,
    Some(Field::Red),
    Some(Field::Green),
    Some(Field::Blue),
    Some(Field::Alpha),
    None,
    Some(Field::Cyan),
    Some(Field::Magenta),
    Some(Field::Yellow),
    Some(Field::Key),
    None,
    Some(Field::Hex),
    Some(Field::Decimal),
];

/// Screen areas of the dialog, computed from the terminal area.
///
/// Rendering and mouse hit tests both derive from [`DialogLayout::compute`],
/// so a click always lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// Whole dialog including its border
    pub dialog: Rect,
    /// Gradient box border area
    pub box_outer: Rect,
    /// Gradient box cells
    pub color_box: Rect,
    /// Slider border area
    pub slider_outer: Rect,
    /// Slider cells
    pub slider: Rect,
    /// Values panel border area
    pub fields_outer: Rect,
    /// Values panel lines
    pub fields: Rect,
    /// Preview border area
    pub preview_outer: Rect,
    /// Preview bitmap cells
    pub preview: Rect,
    /// Draw style list border area
    pub styles_outer: Rect,
    /// Draw style list lines
    pub styles: Rect,
    /// Status line
    pub status: Rect,
    /// Key hints line
    pub help: Rect,
}

impl DialogLayout {
    /// Lays the dialog out centered in `area`.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        let inner = Block::default().borders(Borders::ALL).inner(dialog);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Status
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),    // Gradient box
                Constraint::Length(5),  // Slider
                Constraint::Length(24), // Values
                Constraint::Length(16), // Preview + styles
            ])
            .split(rows[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[3]);

        let bordered = |r: Rect| Block::default().borders(Borders::ALL).inner(r);

        Self {
            dialog,
            box_outer: columns[0],
            color_box: bordered(columns[0]),
            slider_outer: columns[1],
            slider: bordered(columns[1]),
            fields_outer: columns[2],
            fields: bordered(columns[2]),
            preview_outer: side[0],
            preview: bordered(side[0]),
            styles_outer: side[1],
            styles: bordered(side[1]),
            status: rows[1],
            help: rows[2],
        }
    }

    /// Field shown on screen row `y`, if any.
    #[must_use]
    pub fn field_at_row(&self, y: u16) -> Option<Field> {
        if y < self.fields.y || y >= self.fields.bottom() {
            return None;
        }
        FIELD_ROWS
            .get(usize::from(y - self.fields.y))
            .copied()
            .flatten()
    }
}

/// Status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusMessage {
    text: String,
    is_error: bool,
}

/// State for the color picker dialog
#[derive(Debug, Clone)]
pub struct ColorPickerState {
    model: ColorModel,
    draw_style: DrawStyle,
    /// What the box and slider draw; keeps hue and saturation through gray
    gradient: GradientColor,
    focus: Field,
    /// Crosshair position in the box, normalized
    cursor: (f64, f64),
    /// Marker position on the slider, normalized
    slider: f64,
    status: Option<StatusMessage>,
    closed: bool,
}

impl ColorPickerState {
    /// Creates a picker.
    ///
    /// `current` becomes both the starting color and the old color shown in
    /// the preview; without it the picker starts at red with no old color.
    #[must_use]
    pub fn new(current: Option<Rgba>, draw_style: DrawStyle) -> Self {
        let model = ColorModel::new(current);
        let mut state = Self {
            gradient: GradientColor::from_color(model.color()),
            model,
            draw_style,
            focus: Field::ColorBox,
            cursor: (0.0, 0.0),
            slider: 0.0,
            status: None,
            closed: false,
        };
        state.sync_positions();
        state
    }

    /// The color being edited.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.model.color()
    }

    /// The synchronized color model.
    #[must_use]
    pub const fn model(&self) -> &ColorModel {
        &self.model
    }

    /// The focused field.
    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// The active draw style.
    #[must_use]
    pub const fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    /// The color as the box and slider draw it.
    #[must_use]
    pub const fn gradient(&self) -> GradientColor {
        self.gradient
    }

    /// Crosshair position in the box.
    #[must_use]
    pub const fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Marker position on the slider.
    #[must_use]
    pub const fn slider(&self) -> f64 {
        self.slider
    }

    /// Last status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Switches the draw style and moves the crosshair and marker to match.
    pub fn set_draw_style(&mut self, style: DrawStyle) {
        self.draw_style = style;
        self.sync_positions();
    }

    /// Picks the color at `(x, y)` in the box.
    pub fn pick_box(&mut self, x: f64, y: f64) {
        self.cursor = (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
        self.gradient =
            gradient::box_color(self.draw_style, self.gradient, self.cursor.0, self.cursor.1);
        self.model.change_color(self.gradient.color, None);
    }

    /// Picks the color at position `t` on the slider.
    pub fn pick_slider(&mut self, t: f64) {
        self.slider = t.clamp(0.0, 1.0);
        self.gradient = gradient::slider_color(self.draw_style, self.gradient, self.slider);
        self.model.change_color(self.gradient.color, None);
    }

    /// Restores the old color, if the picker has one.
    pub fn reset_to_old(&mut self) {
        if self.model.reset_to_old() {
            self.sync_gradient();
            self.set_status("Restored old color");
        } else {
            self.set_error("No old color to restore");
        }
    }

    /// Takes the gradient from the model after an edit outside the box and slider.
    fn sync_gradient(&mut self) {
        self.gradient = GradientColor::from_color(self.color());
        self.sync_positions();
    }

    /// Moves the crosshair and marker to the gradient color.
    fn sync_positions(&mut self) {
        self.cursor = gradient::box_position(self.draw_style, self.gradient);
        self.slider = gradient::slider_position(self.draw_style, self.gradient);
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    /// Applies a new value to a numeric field through the color model.
    fn apply_numeric(&mut self, field: Field, value: u16) {
        let Some(max) = field.max() else {
            return;
        };
        let value = value.min(max);
        let byte = u8::try_from(value).unwrap_or(u8::MAX);
        let f = self.model.fields().clone();

        match field {
            Field::Hue => self.model.set_hsb(value, f.saturation, f.brightness),
            Field::Saturation => self.model.set_hsb(f.hue, byte, f.brightness),
            Field::Brightness => self.model.set_hsb(f.hue, f.saturation, byte),
            Field::Red => self.model.set_rgba(Rgba::new(byte, f.green, f.blue, f.alpha)),
            Field::Green => self.model.set_rgba(Rgba::new(f.red, byte, f.blue, f.alpha)),
            Field::Blue => self.model.set_rgba(Rgba::new(f.red, f.green, byte, f.alpha)),
            Field::Alpha => self.model.set_alpha(byte),
            Field::Cyan => self.model.set_cmyk(byte, f.magenta, f.yellow, f.key),
            Field::Magenta => self.model.set_cmyk(f.cyan, byte, f.yellow, f.key),
            Field::Yellow => self.model.set_cmyk(f.cyan, f.magenta, byte, f.key),
            Field::Key => self.model.set_cmyk(f.cyan, f.magenta, f.yellow, byte),
            Field::ColorBox | Field::Slider | Field::Hex | Field::Decimal => return,
        }

        if matches!(field, Field::Hue | Field::Saturation | Field::Brightness) {
            // Typed HSB values stay meaningful for gray colors
            let f = self.model.fields();
            let hsb = Hsb::from_display(f.hue, f.saturation, f.brightness, f.alpha);
            self.gradient = GradientColor {
                color: self.color(),
                hsb,
            };
            self.sync_positions();
        } else {
            self.sync_gradient();
        }
    }

    /// Applies new text to the hex or decimal field through the color model.
    fn apply_text(&mut self, field: Field, text: &str) {
        let changed = match field {
            Field::Hex => self.model.set_hex(text),
            Field::Decimal => self.model.set_decimal(text),
            _ => false,
        };
        if changed {
            self.sync_gradient();
        }
    }

    fn handle_numeric_input(&mut self, field: Field, key: KeyEvent) -> Option<ComponentEvent> {
        let max = field.max()?;
        let value = field.value(self.model.fields());

        let new_value = match key.code {
            KeyCode::Up | KeyCode::Char('+') => value.saturating_add(1).min(max),
            KeyCode::Down | KeyCode::Char('-') => value.saturating_sub(1),
            KeyCode::PageUp => value.saturating_add(10).min(max),
            KeyCode::PageDown => value.saturating_sub(10),
            KeyCode::Home => 0,
            KeyCode::End => max,
            KeyCode::Backspace => value / 10,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).and_then(|d| u16::try_from(d).ok())?;
                // Typing past the maximum starts a new number
                let appended = value.saturating_mul(10).saturating_add(digit);
                if appended > max {
                    digit.min(max)
                } else {
                    appended
                }
            }
            _ => return None,
        };

        if new_value != value {
            self.apply_numeric(field, new_value);
        }
        None
    }

    fn handle_text_input(&mut self, field: Field, key: KeyEvent) -> Option<ComponentEvent> {
        let mut text = match field {
            Field::Hex => self.model.fields().hex.clone(),
            Field::Decimal => self.model.fields().decimal.clone(),
            _ => return None,
        };

        match key.code {
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Delete => text.clear(),
            KeyCode::Char(c) if !c.is_control() => text.push(c),
            _ => return None,
        }

        self.apply_text(field, &text);
        None
    }

    #[allow(clippy::unnecessary_wraps)]
    fn handle_box_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            BOX_STEP * 5.0
        } else {
            BOX_STEP
        };
        let (x, y) = self.cursor;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.pick_box(x - step, y),
            KeyCode::Right | KeyCode::Char('l') => self.pick_box(x + step, y),
            KeyCode::Up | KeyCode::Char('k') => self.pick_box(x, y - step),
            KeyCode::Down | KeyCode::Char('j') => self.pick_box(x, y + step),
            KeyCode::Char(c) => {
                if let Some(style) = DrawStyle::from_shortcut(c) {
                    self.set_draw_style(style);
                }
            }
            _ => {}
        }
        None
    }

    #[allow(clippy::unnecessary_wraps)]
    fn handle_slider_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        let t = self.slider;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.pick_slider(t - SLIDER_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.pick_slider(t + SLIDER_STEP),
            KeyCode::PageUp => self.pick_slider(t - SLIDER_PAGE),
            KeyCode::PageDown => self.pick_slider(t + SLIDER_PAGE),
            KeyCode::Home => self.pick_slider(0.0),
            KeyCode::End => self.pick_slider(1.0),
            KeyCode::Char(c) => {
                if let Some(style) = DrawStyle::from_shortcut(c) {
                    self.set_draw_style(style);
                }
            }
            _ => {}
        }
        None
    }

    fn copy_hex_to_clipboard(&mut self) {
        let hex = self.color().to_hex();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(hex.clone()))
        {
            Ok(()) => self.set_status(format!("Copied {hex} to clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.set_error(format!("Failed to copy to clipboard: {e}"));
            }
        }
    }

    fn confirm(&mut self) -> Option<ComponentEvent> {
        self.closed = true;
        tracing::debug!(color = %self.color(), "color picker confirmed");
        Some(ComponentEvent::ColorSelected(self.color()))
    }

    fn cancel(&mut self) -> Option<ComponentEvent> {
        self.closed = true;
        tracing::debug!("color picker cancelled");
        Some(ComponentEvent::Cancelled)
    }
}

impl Component for ColorPickerState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.reset_to_old(),
                KeyCode::Char('y') => self.copy_hex_to_clipboard(),
                KeyCode::Char('c') => return self.cancel(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return self.cancel(),
            KeyCode::Enter => return self.confirm(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Field::ColorBox => self.handle_box_input(key),
            Field::Slider => self.handle_slider_input(key),
            Field::Hex | Field::Decimal => self.handle_text_input(self.focus, key),
            field => self.handle_numeric_input(field, key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<Self::Event> {
        let pressed = matches!(
            mouse.kind,
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
        );
        if !pressed {
            return None;
        }

        let layout = DialogLayout::compute(area);
        let position = Position::new(mouse.column, mouse.row);

        if layout.color_box.contains(position) {
            self.focus = Field::ColorBox;
            self.pick_box(
                cell_fraction(position.x - layout.color_box.x, layout.color_box.width),
                cell_fraction(position.y - layout.color_box.y, layout.color_box.height),
            );
        } else if layout.slider.contains(position) {
            self.focus = Field::Slider;
            self.pick_slider(cell_fraction(
                position.y - layout.slider.y,
                layout.slider.height,
            ));
        } else if layout.preview.contains(position) {
            let renderer = PreviewRenderer::for_model(&self.model);
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && renderer.band_at(position.y - layout.preview.y, layout.preview.height)
                    == Some(PreviewBand::Old)
            {
                self.reset_to_old();
            }
        } else if layout.fields.contains(position) {
            if let Some(field) = layout.field_at_row(position.y) {
                self.focus = field;
            }
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let layout = DialogLayout::compute(area);

        // Clear the background area first
        f.render_widget(Clear, layout.dialog);
        let background = Block::default()
            .title(" Color Picker ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(background, layout.dialog);

        render_gradient(f, &layout, self, theme);
        render_fields(f, &layout, self, theme);
        render_preview(f, &layout, self, theme);
        render_styles(f, &layout, self, theme);
        render_status(f, &layout, self, theme);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

/// Draws a bitmap into the buffer, one pixel per cell background.
struct BitmapWidget<'a>(&'a Bitmap);

impl Widget for BitmapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height.min(self.0.height()) {
            for x in 0..area.width.min(self.0.width()) {
                if let (Some(color), Some(cell)) =
                    (self.0.pixel(x, y), buf.cell_mut((area.x + x, area.y + y)))
                {
                    cell.set_symbol(" ");
                    cell.set_bg(color.to_ratatui_color());
                }
            }
        }
    }
}

/// Gradient box with a crosshair.
struct GradientBox {
    style: DrawStyle,
    base: GradientColor,
    cursor: (f64, f64),
}

impl Widget for GradientBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cross_x = cell_index(self.cursor.0, area.width);
        let cross_y = cell_index(self.cursor.1, area.height);

        for y in 0..area.height {
            for x in 0..area.width {
                let color = gradient::box_color(
                    self.style,
                    self.base,
                    cell_fraction(x, area.width),
                    cell_fraction(y, area.height),
                )
                .color;
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_bg(color.to_ratatui_color());
                    if x == cross_x && y == cross_y {
                        cell.set_symbol("┼");
                        cell.set_fg(contrast_color(color));
                    } else {
                        cell.set_symbol(" ");
                    }
                }
            }
        }
    }
}

/// Gradient slider with a marker row.
struct GradientSlider {
    style: DrawStyle,
    base: GradientColor,
    position: f64,
}

impl Widget for GradientSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let marker = cell_index(self.position, area.height);

        for y in 0..area.height {
            let color = gradient::slider_swatch(self.style, self.base, cell_fraction(y, area.height));
            for x in 0..area.width {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_bg(color.to_ratatui_color());
                    cell.set_fg(contrast_color(color));
                    let symbol = match (y == marker, x) {
                        (true, 0) => "▸",
                        (true, x) if x + 1 == area.width => "◂",
                        _ => " ",
                    };
                    cell.set_symbol(symbol);
                }
            }
        }
    }
}

fn focus_border(state: &ColorPickerState, field: Field, theme: &Theme) -> Style {
    if state.focus == field {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    }
}

fn render_gradient(f: &mut Frame, layout: &DialogLayout, state: &ColorPickerState, theme: &Theme) {
    let box_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.draw_style.name()))
        .border_style(focus_border(state, Field::ColorBox, theme));
    f.render_widget(box_block, layout.box_outer);
    f.render_widget(
        GradientBox {
            style: state.draw_style,
            base: state.gradient,
            cursor: state.cursor,
        },
        layout.color_box,
    );

    let slider_block = Block::default()
        .borders(Borders::ALL)
        .title(state.draw_style.short_label())
        .border_style(focus_border(state, Field::Slider, theme));
    f.render_widget(slider_block, layout.slider_outer);
    f.render_widget(
        GradientSlider {
            style: state.draw_style,
            base: state.gradient,
            position: state.slider,
        },
        layout.slider,
    );
}

fn render_fields(f: &mut Frame, layout: &DialogLayout, state: &ColorPickerState, theme: &Theme) {
    let fields = state.model.fields();

    let lines: Vec<Line> = FIELD_ROWS
        .iter()
        .map(|row| match row {
            None => Line::raw(""),
            Some(field) => {
                let focused = state.focus == *field;
                let value = match field {
                    Field::Hex => fields.hex.clone(),
                    Field::Decimal => fields.decimal.clone(),
                    _ => format!("{:>3}{}", field.value(fields), field.unit()),
                };
                let cursor = if focused && matches!(field, Field::Hex | Field::Decimal) {
                    "_"
                } else {
                    ""
                };

                let value_style = if focused {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };

                Line::from(vec![
                    Span::styled(
                        format!("{:<11}", field.label()),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled(format!("{value}{cursor}"), value_style),
                ])
            }
        })
        .collect();

    let border_style = if matches!(state.focus, Field::ColorBox | Field::Slider) {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.accent)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Values ")
        .border_style(border_style);
    f.render_widget(block, layout.fields_outer);
    f.render_widget(Paragraph::new(lines), layout.fields);
}

fn render_preview(f: &mut Frame, layout: &DialogLayout, state: &ColorPickerState, theme: &Theme) {
    let title = if state.model.old_color().is_some() {
        " Old / New "
    } else {
        " New "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.text_muted));
    f.render_widget(block, layout.preview_outer);

    // Bitmap lives only for this frame
    let bitmap = PreviewRenderer::for_model(&state.model)
        .render(layout.preview.width, layout.preview.height);
    f.render_widget(BitmapWidget(&bitmap), layout.preview);
}

fn render_styles(f: &mut Frame, layout: &DialogLayout, state: &ColorPickerState, theme: &Theme) {
    let lines: Vec<Line> = DrawStyle::ALL
        .iter()
        .enumerate()
        .map(|(i, style)| {
            let style_text = if *style == state.draw_style {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.text_muted)),
                Span::styled(style.name(), style_text),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Style ")
        .border_style(Style::default().fg(theme.text_muted));
    f.render_widget(block, layout.styles_outer);
    f.render_widget(Paragraph::new(lines), layout.styles);
}

fn render_status(f: &mut Frame, layout: &DialogLayout, state: &ColorPickerState, theme: &Theme) {
    if let Some(status) = &state.status {
        let color = if status.is_error {
            theme.error
        } else {
            theme.text
        };
        f.render_widget(
            Paragraph::new(status.text.as_str()).style(Style::default().fg(color)),
            layout.status,
        );
    }

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" Field  "),
        Span::styled("↑↓←→", Style::default().fg(theme.accent)),
        Span::raw(" Adjust  "),
        Span::styled("1-6", Style::default().fg(theme.accent)),
        Span::raw(" Style  "),
        Span::styled("^R", Style::default().fg(theme.accent)),
        Span::raw(" Old  "),
        Span::styled("^Y", Style::default().fg(theme.accent)),
        Span::raw(" Copy  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" Apply  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(Paragraph::new(hints), layout.help);
}

/// Black or white, whichever reads better on `color`.
fn contrast_color(color: Rgba) -> Color {
    let luma = 299 * u32::from(color.r) + 587 * u32::from(color.g) + 114 * u32::from(color.b);
    if luma > 128_000 {
        Color::Black
    } else {
        Color::White
    }
}

/// Helper to create a rectangle of at most `width` x `height` centered in `r`.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn focus(state: &mut ColorPickerState, field: Field) {
        while state.focus() != field {
            state.handle_input(key(KeyCode::Tab));
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_new_without_color() {
        let state = ColorPickerState::new(None, DrawStyle::Saturation);
        assert_eq!(state.color(), Rgba::RED);
        assert_eq!(state.model().old_color(), None);
        assert_eq!(state.focus(), Field::ColorBox);
        // Red sits top-left of the saturation box
        assert!(state.cursor().0.abs() < 1e-9);
        assert!(state.cursor().1.abs() < 1e-9);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Field::Decimal.next(), Field::ColorBox);
        assert_eq!(Field::ColorBox.previous(), Field::Decimal);

        let mut state = ColorPickerState::new(None, DrawStyle::Hue);
        state.handle_input(key(KeyCode::Tab));
        assert_eq!(state.focus(), Field::Slider);
        state.handle_input(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.focus(), Field::ColorBox);
    }

    #[test]
    fn test_numeric_field_arrows_and_digits() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(10, 20, 30)), DrawStyle::Red);
        focus(&mut state, Field::Green);

        state.handle_input(key(KeyCode::Up));
        assert_eq!(state.color(), Rgba::rgb(10, 21, 30));
        state.handle_input(key(KeyCode::PageDown));
        assert_eq!(state.color(), Rgba::rgb(10, 11, 30));

        // 11 -> 1 -> 12 -> 128
        state.handle_input(key(KeyCode::Backspace));
        state.handle_input(key(KeyCode::Char('2')));
        state.handle_input(key(KeyCode::Char('8')));
        assert_eq!(state.color().g, 128);

        // 1289 would exceed 255, so the digit starts over
        state.handle_input(key(KeyCode::Char('9')));
        assert_eq!(state.color().g, 9);

        state.handle_input(key(KeyCode::End));
        assert_eq!(state.color().g, 255);
        assert_eq!(state.model().fields().hex, "0AFF1E");
    }

    #[test]
    fn test_hsb_field_edit_keeps_typed_value() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        focus(&mut state, Field::Hue);
        state.handle_input(key(KeyCode::Char('1')));
        state.handle_input(key(KeyCode::Char('2')));
        state.handle_input(key(KeyCode::Char('0')));
        assert_eq!(state.model().fields().hue, 120);
        assert_eq!(state.color(), Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn test_alpha_field() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        focus(&mut state, Field::Alpha);
        state.handle_input(key(KeyCode::Home));
        assert_eq!(state.color(), Rgba::new(255, 0, 0, 0));
        assert_eq!(state.model().fields().hex, "00FF0000");
    }

    #[test]
    fn test_hex_typing() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(1, 2, 3)), DrawStyle::Saturation);
        focus(&mut state, Field::Hex);

        state.handle_input(key(KeyCode::Delete));
        assert_eq!(state.model().fields().hex, "");
        assert_eq!(state.color(), Rgba::rgb(1, 2, 3));

        for c in "00FF".chars() {
            state.handle_input(key(KeyCode::Char(c)));
        }
        // "00FF" is a valid ARGB short form
        assert_eq!(state.color(), Rgba::new(0, 0xFF, 0xFF, 0));

        for c in "80".chars() {
            state.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(state.model().fields().hex, "00FF80");
        // The six digit form goes back to the alpha from before typing
        assert_eq!(state.color(), Rgba::rgb(0, 255, 128));
        assert_eq!(state.model().fields().decimal, "65408");
    }

    #[test]
    fn test_invalid_hex_and_decimal_ignored() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(1, 2, 3)), DrawStyle::Saturation);
        focus(&mut state, Field::Hex);
        state.handle_input(key(KeyCode::Delete));
        for c in "zzzzzz".chars() {
            state.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(state.color(), Rgba::rgb(1, 2, 3));

        focus(&mut state, Field::Decimal);
        state.handle_input(key(KeyCode::Delete));
        for c in "abc".chars() {
            state.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(state.color(), Rgba::rgb(1, 2, 3));
        assert_eq!(state.model().fields().decimal, "abc");
    }

    #[test]
    fn test_box_and_slider_keys() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(0, 0, 0)), DrawStyle::Red);
        // Red style: box x = blue, y = green (top = 255)
        state.handle_input(key(KeyCode::Right));
        assert!(state.color().b > 0);
        assert_eq!(state.color().g, 0);

        state.handle_input(key(KeyCode::Char('3')));
        assert_eq!(state.draw_style(), DrawStyle::Brightness);

        state.set_draw_style(DrawStyle::Red);
        focus(&mut state, Field::Slider);
        state.handle_input(key(KeyCode::Home));
        assert_eq!(state.color().r, 255);
        state.handle_input(key(KeyCode::End));
        assert_eq!(state.color().r, 0);
    }

    #[test]
    fn test_box_keeps_saturation_through_black() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        state.pick_box(0.0, 1.0);
        assert_eq!(state.color(), Rgba::BLACK);

        state.pick_box(0.0, 0.0);
        assert_eq!(state.model().fields().hex, "FF0000");
        assert_eq!(state.color(), Rgba::RED);
    }

    #[test]
    fn test_hue_slider_on_white_steers_later_box_picks() {
        let mut state = ColorPickerState::new(None, DrawStyle::Hue);
        state.pick_box(0.0, 0.0);
        assert_eq!(state.color(), Rgba::WHITE);

        state.pick_slider(0.5);
        assert_eq!(state.color(), Rgba::WHITE);
        assert!((state.slider() - 0.5).abs() < 1e-9);

        state.pick_box(1.0, 0.0);
        assert_eq!(state.model().fields().hex, "00FFFF");
    }

    #[test]
    fn test_typed_hue_on_gray_moves_slider() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(128, 128, 128)), DrawStyle::Hue);
        focus(&mut state, Field::Hue);
        for c in "180".chars() {
            state.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(state.model().fields().hue, 180);
        assert_eq!(state.color(), Rgba::rgb(128, 128, 128));
        assert!((state.slider() - 0.5).abs() < 1e-9);

        state.set_draw_style(DrawStyle::Saturation);
        state.pick_box(state.cursor().0, 0.0);
        assert_eq!(state.color(), Rgba::WHITE);
        state.set_draw_style(DrawStyle::Hue);
        state.pick_box(1.0, 0.0);
        assert_eq!(state.color(), Rgba::rgb(0, 255, 255));
    }

    #[test]
    fn test_reset_refreshes_gradient() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(0, 0, 255)), DrawStyle::Hue);
        state.pick_slider(1.0);
        assert_eq!(state.color(), Rgba::RED);
        state.reset_to_old();
        assert_eq!(state.gradient(), GradientColor::from_color(Rgba::rgb(0, 0, 255)));
    }

    #[test]
    fn test_enter_and_escape() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        assert_eq!(
            state.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::ColorSelected(Rgba::RED))
        );
        assert!(state.should_close());

        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        assert_eq!(
            state.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        );
    }

    #[test]
    fn test_ctrl_r_resets_to_old() {
        let old = Rgba::new(40, 50, 60, 70);
        let mut state = ColorPickerState::new(Some(old), DrawStyle::Saturation);
        state.pick_box(0.9, 0.1);
        assert_ne!(state.color(), old);

        state.handle_input(ctrl('r'));
        assert_eq!(state.color(), old);
        assert_eq!(state.status(), Some("Restored old color"));

        let mut without_old = ColorPickerState::new(None, DrawStyle::Saturation);
        without_old.handle_input(ctrl('r'));
        assert_eq!(without_old.color(), Rgba::RED);
        assert_eq!(without_old.status(), Some("No old color to restore"));
    }

    #[test]
    fn test_click_old_band_resets() {
        let old = Rgba::rgb(200, 10, 10);
        let mut state = ColorPickerState::new(Some(old), DrawStyle::Saturation);
        state.pick_slider(0.5);
        assert_ne!(state.color(), old);

        let layout = DialogLayout::compute(AREA);
        // Bottom band is the new color; clicking it does nothing
        state.handle_mouse(
            click(layout.preview.x, layout.preview.bottom() - 1),
            AREA,
        );
        assert_ne!(state.color(), old);

        state.handle_mouse(click(layout.preview.x, layout.preview.y), AREA);
        assert_eq!(state.color(), old);
    }

    #[test]
    fn test_click_box_and_slider() {
        let mut state = ColorPickerState::new(Some(Rgba::rgb(0, 0, 0)), DrawStyle::Blue);
        let layout = DialogLayout::compute(AREA);

        // Blue style: top-right of the box is red 255, green 255
        state.handle_mouse(
            click(layout.color_box.right() - 1, layout.color_box.y),
            AREA,
        );
        assert_eq!(state.focus(), Field::ColorBox);
        assert_eq!(state.color(), Rgba::rgb(255, 255, 0));

        state.handle_mouse(click(layout.slider.x, layout.slider.y), AREA);
        assert_eq!(state.focus(), Field::Slider);
        assert_eq!(state.color(), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_click_field_focuses_it() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        let layout = DialogLayout::compute(AREA);
        // Row 14 of the values panel is the hex field
        state.handle_mouse(click(layout.fields.x, layout.fields.y + 14), AREA);
        assert_eq!(state.focus(), Field::Hex);
        assert_eq!(layout.field_at_row(layout.fields.y + 3), None);
    }

    #[test]
    fn test_mouse_release_ignored() {
        let mut state = ColorPickerState::new(None, DrawStyle::Saturation);
        let layout = DialogLayout::compute(AREA);
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: layout.color_box.x,
            row: layout.color_box.bottom() - 1,
            modifiers: KeyModifiers::NONE,
        };
        state.handle_mouse(release, AREA);
        assert_eq!(state.color(), Rgba::RED);
    }

    #[test]
    fn test_render_draws_preview_bands() {
        let old = Rgba::rgb(0, 0, 255);
        let state = ColorPickerState::new(Some(old), DrawStyle::Saturation);
        let mut picked = state.clone();
        picked.pick_box(0.0, 0.0);
        let new = picked.color();

        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                picked.render(f, area, &Theme::dark());
            })
            .unwrap();

        let layout = DialogLayout::compute(AREA);
        let buffer = terminal.backend().buffer();
        let top = &buffer[(layout.preview.x, layout.preview.y)];
        let bottom = &buffer[(layout.preview.x, layout.preview.bottom() - 1)];
        assert_eq!(top.bg, old.to_ratatui_color());
        assert_eq!(bottom.bg, new.to_ratatui_color());
    }

    #[test]
    fn test_layout_fits_small_terminal() {
        let small = Rect::new(0, 0, 40, 12);
        let layout = DialogLayout::compute(small);
        assert_eq!(layout.dialog, small);
        assert!(layout.help.y < small.bottom());
    }
}
