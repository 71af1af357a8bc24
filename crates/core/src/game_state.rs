//! Game state module - the engine state machine
//!
//! This module ties together all core components: playfield, pieces, RNG and
//! scoring. Commands move the current piece; a blocked downward move locks it,
//! clears full rows, updates the score and spawns the next piece. A spawn that
//! does not fit ends the game.
//!
//! Every visible change is recorded as draw instructions in a [`Frame`] that
//! the caller collects with [`GameEngine::take_frame`].

use crate::board::Playfield;
use crate::display::{DrawOp, Drawable, Frame, ScreenItem};
use crate::help::HelpPanel;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::ScoreTracker;
use crate::types::layout::{GAMEOVER_X, GAMEOVER_Y};
use crate::types::{Color, Command, ROTATE_DELTA};
use std::time::Duration;

/// Engine lifecycle
///
/// `Spawning` and `Locking` only last for the duration of one command; between
/// commands the engine is either `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    GameOver,
}

/// Result of trying to move the current piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved
    Moved,
    /// A sideways move or rotation did not fit; nothing changed
    Rejected,
    /// A downward move did not fit; the piece has to lock
    Landed,
}

/// Start-up settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub seed: u32,
    pub show_help: bool,
    pub show_next: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            show_help: true,
            show_next: true,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    playfield: Playfield,
    score: ScoreTracker,
    current: Piece,
    next: Piece,
    help: HelpPanel,
    rng: SimpleRng,
    phase: Phase,
    next_visible: bool,
    pieces_spawned: u32,
    frame: Frame,
}

impl GameEngine {
    /// Create a new game with the given RNG seed and default options
    pub fn new(seed: u32) -> Self {
        Self::with_options(GameOptions {
            seed,
            ..GameOptions::default()
        })
    }

    pub fn with_options(options: GameOptions) -> Self {
        Self::with_playfield(options, Playfield::new())
    }

    /// Start a game on a prepared playfield.
    ///
    /// The first piece is spawned right away, so a playfield whose spawn
    /// area is blocked yields a game that is already over.
    pub fn with_playfield(options: GameOptions, playfield: Playfield) -> Self {
        let mut rng = SimpleRng::new(options.seed);
        let mut next = Piece::from_roll(rng.roll_piece());
        next.set_visible(options.show_next);

        let mut engine = Self {
            playfield,
            score: ScoreTracker::new(),
            // Replaced by the first spawn.
            current: next,
            next,
            help: HelpPanel::new(options.show_help),
            rng,
            phase: Phase::Spawning,
            next_visible: options.show_next,
            pieces_spawned: 0,
            frame: Frame::new(),
        };

        engine.spawn_next();
        // The opening frame is a full repaint; partial draws from the spawn are redundant.
        engine.frame.clear();
        engine.redraw();
        engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False once the game is over or the player quit
    pub fn running(&self) -> bool {
        self.phase != Phase::GameOver
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn help_visible(&self) -> bool {
        self.help.is_visible()
    }

    pub fn next_visible(&self) -> bool {
        self.next_visible
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Current gravity interval; changes as the level rises
    pub fn gravity_delay(&self) -> Duration {
        self.score.gravity_delay()
    }

    /// Draw instructions accumulated since the last call
    pub fn take_frame(&mut self) -> Frame {
        std::mem::take(&mut self.frame)
    }

    /// Pending draw instructions
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Apply a game command
    ///
    /// After game over every command is ignored.
    pub fn apply(&mut self, command: Command) {
        if !self.running() {
            tracing::trace!(command = command.as_str(), "ignored after game over");
            return;
        }

        match command {
            Command::MoveLeft => {
                self.try_move(-1, 0, 0);
            }
            Command::MoveRight => {
                self.try_move(1, 0, 0);
            }
            Command::Rotate => {
                self.try_move(0, 0, ROTATE_DELTA);
            }
            Command::SoftDropTick => {
                self.soft_drop();
            }
            Command::HardDrop => self.hard_drop(),
            Command::Quit => self.finish(),
            Command::ToggleHelp => self.help.toggle(&mut self.frame),
            Command::ToggleNextPreview => {
                self.next_visible = !self.next_visible;
                self.next.toggle(&mut self.frame);
            }
            Command::ToggleColor => {
                self.frame.push(DrawOp::ToggleColorMode);
                self.redraw();
            }
            Command::None => {}
        }
    }

    /// Try to move and/or rotate the current piece
    pub fn try_move(&mut self, dx: i8, dy: i8, dr: i8) -> MoveOutcome {
        let candidate = self.current.candidate(dx, dy, dr);
        if self.playfield.is_valid(&self.current.cells_at(candidate)) {
            self.current.hide(&mut self.frame);
            self.current.commit(candidate);
            self.current.show(&mut self.frame);
            MoveOutcome::Moved
        } else if dy == 0 {
            MoveOutcome::Rejected
        } else {
            MoveOutcome::Landed
        }
    }

    /// Move the current piece one row down, locking it when blocked.
    ///
    /// Returns true if the piece moved, false if it locked.
    pub fn soft_drop(&mut self) -> bool {
        match self.try_move(0, 1, 0) {
            MoveOutcome::Landed => {
                self.lock_current();
                false
            }
            _ => true,
        }
    }

    /// Drop the current piece until it locks
    pub fn hard_drop(&mut self) {
        while self.soft_drop() {}
    }

    /// Lock the current piece, clear rows and spawn the next piece
    fn lock_current(&mut self) {
        self.phase = Phase::Locking;
        self.playfield.lock(&self.current);

        let cleared = self.playfield.clear_full_rows();
        if !cleared.is_empty() {
            let lines = cleared.len() as u32;
            let level_up = self.score.apply_clear(lines);
            tracing::debug!(
                rows = ?cleared.as_slice(),
                score = self.score.score(),
                level_up,
                "lines cleared"
            );
            self.score.draw(true, &mut self.frame);
            self.playfield.draw(true, &mut self.frame);
        }

        self.spawn_next();
    }

    /// Promote the next piece to the spawn point and roll a new next piece.
    ///
    /// Returns false and ends the game if the spawn point is blocked.
    pub fn spawn_next(&mut self) -> bool {
        self.phase = Phase::Spawning;
        self.next.hide(&mut self.frame);

        let mut piece = self.next;
        piece.place_at_spawn();
        if !self.playfield.is_valid(&piece.cells()) {
            tracing::info!(shape = piece.shape().as_str(), "spawn blocked");
            self.finish();
            return false;
        }

        self.current = piece;
        self.current.show(&mut self.frame);

        let mut next = Piece::from_roll(self.rng.roll_piece());
        next.set_visible(self.next_visible);
        self.next = next;
        self.next.show(&mut self.frame);

        self.pieces_spawned += 1;
        self.phase = Phase::Falling;
        tracing::trace!(
            shape = self.current.shape().as_str(),
            orientation = self.current.orientation(),
            "spawned"
        );
        true
    }

    /// Replace the piece waiting in the preview.
    ///
    /// Only shape, orientation and color are taken from `piece`; it goes to
    /// the preview box with the current preview visibility.
    pub fn set_next(&mut self, piece: Piece) {
        self.next.hide(&mut self.frame);
        let mut next = Piece::new(piece.shape(), piece.orientation(), piece.color());
        next.set_visible(self.next_visible);
        self.next = next;
        self.next.show(&mut self.frame);
    }

    /// Repaint the whole screen
    pub fn redraw(&mut self) {
        self.frame.push(DrawOp::ClearScreen);
        self.frame.push(DrawOp::SetCursorVisible(false));
        self.frame.push(DrawOp::Border);
        self.help.show(&mut self.frame);
        self.playfield.draw(true, &mut self.frame);
        self.score.draw(true, &mut self.frame);
        self.next.show(&mut self.frame);
        if self.running() {
            self.current.show(&mut self.frame);
        } else {
            self.draw_game_over();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        tracing::info!(
            score = self.score.score(),
            level = self.score.level(),
            lines = self.score.lines_completed(),
            "game over"
        );
        self.draw_game_over();
    }

    fn draw_game_over(&mut self) {
        self.frame
            .paint_text(GAMEOVER_X, GAMEOVER_Y, "Game over!", Color::White, false);
        self.frame.push(DrawOp::SetCursorVisible(true));
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
