//! TerminalDisplay: paints engine frames on a real terminal.
//!
//! Nothing reaches the writer before [`Display::flush`]; until then all
//! output sits in an internal buffer.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::Display;
use crate::types::layout::{GAMEOVER_Y, NEXT_X, NEXT_Y, PLAYFIELD_X, PLAYFIELD_Y};
use crate::types::{CellArea, Color, BOARD_HEIGHT, BOARD_WIDTH, CELL_COLUMNS};

const FILLED_CELL: &str = "[]";
const PLAYFIELD_EMPTY_CELL: &str = " .";
const PREVIEW_EMPTY_CELL: &str = "  ";
const BORDER_COLOR: Color = Color::Yellow;

/// Map a palette color to the matching terminal color
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Fuchsia => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
    }
}

pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color_enabled: bool,
}

impl TerminalDisplay<io::Stdout> {
    pub fn new(color_enabled: bool) -> Self {
        Self::with_writer(io::stdout(), color_enabled)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W, color_enabled: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
            color_enabled,
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Put the terminal into raw mode and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal.
    ///
    /// The screen is left as is so a final "Game over!" stays readable; the
    /// cursor is parked on the line below it.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::MoveTo(0, GAMEOVER_Y + 1))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn set_fg(&mut self, color: Color) -> io::Result<()> {
        if self.color_enabled {
            self.buf.queue(SetForegroundColor(term_color(color)))?;
        }
        Ok(())
    }

    fn set_bg(&mut self, color: Color) -> io::Result<()> {
        if self.color_enabled {
            self.buf.queue(SetBackgroundColor(term_color(color)))?;
        }
        Ok(())
    }

    fn reset_style(&mut self) -> io::Result<()> {
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn print_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn paint_cell(&mut self, area: CellArea, x: i8, y: i8, color: Option<Color>) -> io::Result<()> {
        if x < 0 || y < 0 {
            return Ok(());
        }
        let (origin_x, origin_y, empty) = match area {
            CellArea::Playfield => (PLAYFIELD_X, PLAYFIELD_Y, PLAYFIELD_EMPTY_CELL),
            CellArea::Preview => (NEXT_X, NEXT_Y, PREVIEW_EMPTY_CELL),
        };
        let col = origin_x + x as u16 * CELL_COLUMNS;
        let row = origin_y + y as u16;

        match color {
            None => self.print_at(col, row, empty),
            Some(color) => {
                self.set_fg(color)?;
                self.set_bg(color)?;
                self.print_at(col, row, FILLED_CELL)?;
                self.reset_style()
            }
        }
    }

    fn paint_border(&mut self) -> io::Result<()> {
        let width = BOARD_WIDTH as u16 * CELL_COLUMNS;
        let height = BOARD_HEIGHT as u16;

        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.set_fg(BORDER_COLOR)?;
        for y in 0..height {
            self.print_at(PLAYFIELD_X - 2, PLAYFIELD_Y + y, "<|")?;
            self.print_at(PLAYFIELD_X + width, PLAYFIELD_Y + y, "|>")?;
        }
        for (i, floor) in ["==", "\\/"].into_iter().enumerate() {
            let line = floor.repeat(BOARD_WIDTH as usize);
            self.print_at(PLAYFIELD_X, PLAYFIELD_Y + height + i as u16, &line)?;
        }
        self.reset_style()
    }

    fn paint_text(&mut self, x: u16, y: u16, text: &str, color: Color, bold: bool) -> io::Result<()> {
        if bold {
            self.buf.queue(SetAttribute(Attribute::Bold))?;
        }
        self.set_fg(color)?;
        self.print_at(x, y, text)?;
        self.reset_style()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.buf.queue(cursor::Show)?;
        } else {
            self.buf.queue(cursor::Hide)?;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn toggle_color_mode(&mut self) -> io::Result<()> {
        self.color_enabled = !self.color_enabled;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_writer()).unwrap()
    }

    #[test]
    fn nothing_is_written_before_flush() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), true);
        display.paint_border().unwrap();
        assert!(display.writer().is_empty());

        display.flush().unwrap();
        assert!(!display.writer().is_empty());
    }

    #[test]
    fn empty_cells_depend_on_area() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), false);
        display.paint_cell(CellArea::Playfield, 0, 0, None).unwrap();
        display.flush().unwrap();
        assert!(output(display).ends_with(" ."));

        let mut display = TerminalDisplay::with_writer(Vec::new(), false);
        display.paint_cell(CellArea::Preview, 0, 0, None).unwrap();
        display.flush().unwrap();
        assert!(output(display).ends_with("  "));
    }

    #[test]
    fn color_mode_only_changes_escape_sequences() {
        let mut colored = TerminalDisplay::with_writer(Vec::new(), true);
        colored.paint_cell(CellArea::Playfield, 4, 7, Some(Color::Blue)).unwrap();
        colored.flush().unwrap();

        let mut plain = TerminalDisplay::with_writer(Vec::new(), true);
        plain.toggle_color_mode().unwrap();
        assert!(!plain.color_enabled());
        plain.paint_cell(CellArea::Playfield, 4, 7, Some(Color::Blue)).unwrap();
        plain.flush().unwrap();

        let colored = output(colored);
        let plain = output(plain);
        assert!(colored.contains(FILLED_CELL));
        assert!(plain.contains(FILLED_CELL));
        assert!(colored.len() > plain.len());
    }

    #[test]
    fn border_has_walls_and_floor() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), false);
        display.paint_border().unwrap();
        display.flush().unwrap();

        let out = output(display);
        assert_eq!(out.matches("<|").count(), BOARD_HEIGHT as usize);
        assert_eq!(out.matches("|>").count(), BOARD_HEIGHT as usize);
        assert!(out.contains(&"==".repeat(10)));
        assert!(out.contains(&"\\/".repeat(10)));
    }
}
