//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::Command`] and runs a reader
//! thread that forwards them to the scheduler over a tokio channel.

pub mod map;
pub mod reader;

pub use tetris_tty_types as types;

pub use map::{map_key, should_quit};
pub use reader::{spawn_reader, InputReader};
