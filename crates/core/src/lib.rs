//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependency** on a
//! terminal, an input device or a clock, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule can be exercised by applying commands directly
//! - **Portable**: rendering goes through the [`Display`] trait
//!
//! # Module Structure
//!
//! - [`pieces`]: the shape catalog and orientation tables
//! - [`piece`]: a tetromino instance with placement, color and visibility
//! - [`board`]: the 10x20 playfield with collision checks and line clearing
//! - [`scoring`]: lines, score, level and gravity interval
//! - [`game_state`]: the engine state machine
//! - [`display`]: draw instructions and the `Display` sink trait
//! - [`help`]: the key help panel
//! - [`rng`]: seeded piece generation
//!
//! # Example
//!
//! ```
//! use tetris_tty_core::GameEngine;
//! use tetris_tty_types::Command;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.playfield().occupied_count(), 4);
//! assert_eq!(game.pieces_spawned(), 2);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Gravity is just [`Command::SoftDropTick`] sent
//! every [`GameEngine::gravity_delay`]; the scheduler in `tetris-tty-engine`
//! takes care of that.
//!
//! [`Command::SoftDropTick`]: tetris_tty_types::Command::SoftDropTick

pub mod board;
pub mod display;
pub mod game_state;
pub mod help;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tetris_tty_types as types;

// Re-export commonly used types for convenience
pub use board::{ClearedRows, Playfield};
pub use display::{Display, DrawOp, Drawable, Frame, RecordingDisplay, ScreenItem};
pub use game_state::{GameEngine, GameOptions, MoveOutcome, Phase};
pub use help::HelpPanel;
pub use piece::{Piece, Placement};
pub use pieces::{get_shape, orientation_count, rotate};
pub use rng::{PieceRoll, SimpleRng};
pub use scoring::{clear_score, ScoreTracker};
