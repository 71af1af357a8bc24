//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), i.e. the 4x4 piece box centered horizontally
//!
//! # Timing and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_GRAVITY_MS` | 1000 | Gravity interval at level 1 |
//! | `GRAVITY_FACTOR` | 0.8 | Interval multiplier applied on each level-up |
//! | `LEVEL_UP_SCORE` | 20 | Level N ends once score exceeds `N * 20` |
//!
//! A clear of `n` lines in a single lock scores `n * n` points.
//!
//! # Examples
//!
//! ```
//! use tetris_tty_types::{Command, ShapeId, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side of the square box every piece orientation fits in
pub const PIECE_BOX: u8 = 4;

/// Spawn column of the piece box origin
pub const SPAWN_X: i8 = ((BOARD_WIDTH - PIECE_BOX) / 2) as i8;

/// Spawn row of the piece box origin
pub const SPAWN_Y: i8 = 0;

/// Gravity interval when a game starts (1000ms = one row per second)
pub const INITIAL_GRAVITY_MS: u64 = 1000;

/// Gravity interval multiplier applied once per level-up
pub const GRAVITY_FACTOR: f64 = 0.8;

/// Score per level: leaving level N requires a score above `N * LEVEL_UP_SCORE`
pub const LEVEL_UP_SCORE: u32 = 20;

/// Orientation step applied by [`Command::Rotate`]
pub const ROTATE_DELTA: i8 = 1;

/// Terminal columns used to draw one grid cell
pub const CELL_COLUMNS: u16 = 2;

/// Fixed screen layout (0-based terminal column/row).
///
/// Renderers need these to line up text emitted by the engine with the cells
/// they paint themselves.
pub mod layout {
    use super::BOARD_HEIGHT;

    /// Top-left corner of the playfield interior
    pub const PLAYFIELD_X: u16 = 29;
    pub const PLAYFIELD_Y: u16 = 0;

    /// Top-left corner of the next-piece preview box
    pub const NEXT_X: u16 = 13;
    pub const NEXT_Y: u16 = 10;

    /// First line of the key help panel
    pub const HELP_X: u16 = 57;
    pub const HELP_Y: u16 = 0;

    /// First line of the score panel
    pub const SCORE_X: u16 = 0;
    pub const SCORE_Y: u16 = 1;

    /// Game over message, below the playfield floor
    pub const GAMEOVER_X: u16 = 0;
    pub const GAMEOVER_Y: u16 = BOARD_HEIGHT as u16 + 2;
}


/// The seven tetromino shapes
///
/// - **Square**: 2x2 block, a single orientation
/// - **Line**: four in a row, two orientations
/// - **S** / **Z**: skew pieces, two orientations each
/// - **L** / **J**: hooked pieces, four orientations each
/// - **T**: four orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Square,
    Line,
    S,
    Z,
    L,
    J,
    T,
}

impl ShapeId {
    /// All shapes, in catalog order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::Square,
        ShapeId::Line,
        ShapeId::S,
        ShapeId::Z,
        ShapeId::L,
        ShapeId::J,
        ShapeId::T,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_tty_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("square"), Some(ShapeId::Square));
    /// assert_eq!(ShapeId::from_str("O"), Some(ShapeId::Square));
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::Line));
    /// assert_eq!(ShapeId::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeId::Square),
            "line" | "i" => Some(ShapeId::Line),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            "l" => Some(ShapeId::L),
            "j" => Some(ShapeId::J),
            "t" => Some(ShapeId::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::Square => "square",
            ShapeId::Line => "line",
            ShapeId::S => "s",
            ShapeId::Z => "z",
            ShapeId::L => "l",
            ShapeId::J => "j",
            ShapeId::T => "t",
        }
    }
}

/// Piece palette
///
/// Colors are assigned to pieces at random, independent of their shape.
/// [`Color::ansi_code`] is the classic 3-bit terminal color number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Fuchsia,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Fuchsia,
        Color::Cyan,
        Color::White,
    ];

    /// ANSI color number (1-7)
    pub fn ansi_code(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Fuchsia => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }
}

/// Screen region a grid cell is painted in.
///
/// Both regions use the same cell geometry; they differ in origin and in how
/// an empty cell looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellArea {
    /// The 10x20 playfield
    Playfield,
    /// The next-piece preview box
    Preview,
}

/// Commands consumed by the game engine
///
/// Produced by keyboard input or synthesized by the gravity timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next orientation in the shape's table
    Rotate,
    /// Move piece one cell down, locking it if blocked (also the gravity tick)
    SoftDropTick,
    /// Drop piece until it locks
    HardDrop,
    /// End the session
    Quit,
    /// Show or hide the key help panel
    ToggleHelp,
    /// Show or hide the next-piece preview
    ToggleNextPreview,
    /// Switch colored rendering on or off
    ToggleColor,
    /// Unrecognized input; has no effect
    None,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDropTick,
        Command::HardDrop,
        Command::Quit,
        Command::ToggleHelp,
        Command::ToggleNextPreview,
        Command::ToggleColor,
        Command::None,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdroptick" => Some(Command::SoftDropTick),
            "harddrop" => Some(Command::HardDrop),
            "quit" => Some(Command::Quit),
            "togglehelp" => Some(Command::ToggleHelp),
            "togglenextpreview" => Some(Command::ToggleNextPreview),
            "togglecolor" => Some(Command::ToggleColor),
            "none" => Some(Command::None),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDropTick => "softDropTick",
            Command::HardDrop => "hardDrop",
            Command::Quit => "quit",
            Command::ToggleHelp => "toggleHelp",
            Command::ToggleNextPreview => "toggleNextPreview",
            Command::ToggleColor => "toggleColor",
            Command::None => "none",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Settled cell with the color of the piece that locked there
pub type Cell = Option<Color>;
