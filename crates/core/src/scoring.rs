//! Scoring module - lines, score, level and gravity
//!
//! A clear of `n` lines scores `n * n`. Once the score passes `level * 20`
//! the level goes up by one and the gravity interval shrinks by a factor of
//! 0.8. The threshold is checked once per clear event, so a single clear can
//! raise the level at most once.

use std::time::Duration;

use crate::display::{Drawable, Frame};
use crate::types::layout::{SCORE_X, SCORE_Y};
use crate::types::{Color, GRAVITY_FACTOR, INITIAL_GRAVITY_MS, LEVEL_UP_SCORE};

/// Score panel color
const SCORE_COLOR: Color = Color::Green;

/// Points for clearing `lines` rows with one lock
pub fn clear_score(lines: u32) -> u32 {
    lines * lines
}

/// Running totals for one game
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTracker {
    lines_completed: u32,
    score: u32,
    level: u32,
    gravity_delay: Duration,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            lines_completed: 0,
            score: 0,
            level: 1,
            gravity_delay: Duration::from_millis(INITIAL_GRAVITY_MS),
        }
    }

    pub fn lines_completed(&self) -> u32 {
        self.lines_completed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Time between two gravity ticks at the current level
    pub fn gravity_delay(&self) -> Duration {
        self.gravity_delay
    }

    /// Record a clear of `lines` rows.
    ///
    /// Returns true when the clear raised the level (and so shortened the
    /// gravity delay).
    pub fn apply_clear(&mut self, lines: u32) -> bool {
        if lines == 0 {
            return false;
        }

        self.lines_completed += lines;
        self.score += clear_score(lines);

        if self.score > self.level * LEVEL_UP_SCORE {
            self.level += 1;
            self.gravity_delay = self.gravity_delay.mul_f64(GRAVITY_FACTOR);
            tracing::info!(
                level = self.level,
                score = self.score,
                delay_ms = self.gravity_delay.as_millis() as u64,
                "level up"
            );
            return true;
        }

        false
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for ScoreTracker {
    fn draw(&self, _visible: bool, frame: &mut Frame) {
        let lines = [
            format!("Lines completed: {}", self.lines_completed),
            format!("Level:           {}", self.level),
            format!("Score:           {}", self.score),
        ];
        for (i, text) in lines.into_iter().enumerate() {
            frame.paint_text(SCORE_X, SCORE_Y + i as u16, text, SCORE_COLOR, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tracker = ScoreTracker::new();
        assert_eq!(tracker.lines_completed(), 0);
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.level(), 1);
        assert_eq!(tracker.gravity_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_quadratic_clear_score() {
        assert_eq!(clear_score(1), 1);
        assert_eq!(clear_score(2), 4);
        assert_eq!(clear_score(3), 9);
        assert_eq!(clear_score(4), 16);
    }

    #[test]
    fn test_zero_lines_is_noop() {
        let mut tracker = ScoreTracker::new();
        assert!(!tracker.apply_clear(0));
        assert_eq!(tracker, ScoreTracker::new());
    }

    #[test]
    fn test_level_up_only_after_exceeding_threshold() {
        let mut tracker = ScoreTracker::new();

        // Score exactly 20 is not above 1 * 20.
        for _ in 0..20 {
            assert!(!tracker.apply_clear(1));
        }
        assert_eq!(tracker.score(), 20);
        assert_eq!(tracker.level(), 1);

        assert!(tracker.apply_clear(1));
        assert_eq!(tracker.level(), 2);
        assert_eq!(tracker.gravity_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_compounds_per_level() {
        let mut tracker = ScoreTracker::new();
        // 16 + 9 = 25 > 20
        tracker.apply_clear(4);
        assert!(tracker.apply_clear(3));
        assert_eq!(tracker.level(), 2);
        // 25 + 16 = 41 > 40
        assert!(tracker.apply_clear(4));
        assert_eq!(tracker.level(), 3);
        assert_eq!(tracker.gravity_delay(), Duration::from_millis(640));
        assert_eq!(tracker.lines_completed(), 11);
    }

    #[test]
    fn test_draw_prints_three_lines() {
        let mut tracker = ScoreTracker::new();
        tracker.apply_clear(2);
        let mut frame = Frame::new();
        tracker.draw(true, &mut frame);
        assert_eq!(frame.len(), 3);
        assert_eq!(
            frame.ops()[2],
            crate::display::DrawOp::Text {
                x: SCORE_X,
                y: SCORE_Y + 2,
                text: "Score:           4".to_string(),
                color: Color::Green,
                bold: true,
            }
        );
    }
}
