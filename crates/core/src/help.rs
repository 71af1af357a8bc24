//! Key help panel shown to the right of the playfield.

use crate::display::{Drawable, Frame, ScreenItem};
use crate::types::layout::{HELP_X, HELP_Y};
use crate::types::Color;

const HELP_COLOR: Color = Color::Cyan;

pub const HELP_TEXT: [&str; 9] = [
    "  Use cursor keys",
    "       or",
    "    s: rotate",
    "a: left,  d: right",
    "    space: drop",
    "      q: quit",
    "  c: toggle color",
    "n: toggle show next",
    "h: toggle this help",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpPanel {
    visible: bool,
}

impl HelpPanel {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }
}

impl Default for HelpPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Drawable for HelpPanel {
    fn draw(&self, visible: bool, frame: &mut Frame) {
        for (i, line) in HELP_TEXT.iter().enumerate() {
            // Hiding overwrites each line with blanks of the same width.
            let text = if visible {
                (*line).to_string()
            } else {
                " ".repeat(line.len())
            };
            frame.paint_text(HELP_X, HELP_Y + i as u16, text, HELP_COLOR, true);
        }
    }
}

impl ScreenItem for HelpPanel {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
