//! Terminal display module.
//!
//! Implements the core [`Display`](tetris_tty_core::Display) sink on top of
//! `crossterm`. Draw instructions are queued into a byte buffer and written to
//! the terminal in one go on flush, so every engine frame appears at once.
//!
//! Each grid cell is 2 characters wide, which keeps the playfield roughly
//! square on common terminal fonts.

pub mod renderer;

pub use tetris_tty_core as core;
pub use tetris_tty_types as types;

pub use renderer::TerminalDisplay;
