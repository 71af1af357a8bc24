//! Display abstraction - draw instructions emitted by the engine
//!
//! The engine never touches the terminal. Every command it processes appends
//! [`DrawOp`]s to a [`Frame`]; the caller hands the finished frame to a
//! [`Display`], which applies it in order and flushes once.

use std::io;

use crate::types::{CellArea, Color};

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Paint one grid cell; `None` paints the area's empty glyph
    Cell {
        area: CellArea,
        x: i8,
        y: i8,
        color: Option<Color>,
    },
    /// Paint the playfield border
    Border,
    /// Print text at a screen position
    Text {
        x: u16,
        y: u16,
        text: String,
        color: Color,
        bold: bool,
    },
    SetCursorVisible(bool),
    ClearScreen,
    /// Flip colored rendering for every later paint
    ToggleColorMode,
}

/// Ordered draw instructions produced by one engine command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    ops: Vec<DrawOp>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn paint_cell(&mut self, area: CellArea, x: i8, y: i8, color: Option<Color>) {
        self.push(DrawOp::Cell { area, x, y, color });
    }

    pub fn paint_text(&mut self, x: u16, y: u16, text: impl Into<String>, color: Color, bold: bool) {
        self.push(DrawOp::Text {
            x,
            y,
            text: text.into(),
            color,
            bold,
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

/// Drawing sink implemented by renderers
///
/// Paint calls may be buffered; nothing has to reach the screen before
/// [`Display::flush`].
pub trait Display {
    fn paint_cell(&mut self, area: CellArea, x: i8, y: i8, color: Option<Color>) -> io::Result<()>;
    fn paint_border(&mut self) -> io::Result<()>;
    fn paint_text(&mut self, x: u16, y: u16, text: &str, color: Color, bold: bool) -> io::Result<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
    fn clear_screen(&mut self) -> io::Result<()>;
    fn toggle_color_mode(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;

    /// Apply one instruction
    fn apply(&mut self, op: &DrawOp) -> io::Result<()> {
        match op {
            DrawOp::Cell { area, x, y, color } => self.paint_cell(*area, *x, *y, *color),
            DrawOp::Border => self.paint_border(),
            DrawOp::Text {
                x,
                y,
                text,
                color,
                bold,
            } => self.paint_text(*x, *y, text, *color, *bold),
            DrawOp::SetCursorVisible(visible) => self.set_cursor_visible(*visible),
            DrawOp::ClearScreen => self.clear_screen(),
            DrawOp::ToggleColorMode => self.toggle_color_mode(),
        }
    }

    /// Apply a whole frame and flush it as a unit
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        for op in frame.ops() {
            self.apply(op)?;
        }
        self.flush()
    }
}

/// Something that can paint itself, or erase what it painted
pub trait Drawable {
    /// Draw with `visible = true`, or paint blanks over the same area
    fn draw(&self, visible: bool, frame: &mut Frame);
}

/// A drawable with its own visibility flag
pub trait ScreenItem: Drawable {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Paint the item if it is visible
    fn show(&self, frame: &mut Frame) {
        if self.is_visible() {
            self.draw(true, frame);
        }
    }

    /// Erase the item if it is visible (the flag is left alone)
    fn hide(&self, frame: &mut Frame) {
        if self.is_visible() {
            self.draw(false, frame);
        }
    }

    /// Flip visibility and repaint accordingly
    fn toggle(&mut self, frame: &mut Frame) {
        let visible = !self.is_visible();
        self.set_visible(visible);
        self.draw(visible, frame);
    }
}

/// Display that records everything it is asked to do.
///
/// Used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DrawOp>,
    pub flushes: usize,
    pub color_enabled: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            flushes: 0,
            color_enabled: true,
        }
    }

    /// All text printed so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn paint_cell(&mut self, area: CellArea, x: i8, y: i8, color: Option<Color>) -> io::Result<()> {
        self.ops.push(DrawOp::Cell { area, x, y, color });
        Ok(())
    }

    fn paint_border(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Border);
        Ok(())
    }

    fn paint_text(&mut self, x: u16, y: u16, text: &str, color: Color, bold: bool) -> io::Result<()> {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            color,
            bold,
        });
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.ops.push(DrawOp::SetCursorVisible(visible));
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::ClearScreen);
        Ok(())
    }

    fn toggle_color_mode(&mut self) -> io::Result<()> {
        self.color_enabled = !self.color_enabled;
        self.ops.push(DrawOp::ToggleColorMode);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
