//! tetris-tty (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, tests and
//! benches can write `tetris_tty::core::GameEngine` and friends.

pub use tetris_tty_core as core;
pub use tetris_tty_engine as engine;
pub use tetris_tty_input as input;
pub use tetris_tty_term as term;
pub use tetris_tty_types as types;
