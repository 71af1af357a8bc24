//! RNG module - seeded random piece generation
//!
//! Every new piece gets an independently chosen shape, starting orientation
//! and color. A small LCG keeps games reproducible from a seed, which the
//! tests and the `--seed` flag rely on.

use crate::pieces::orientation_count;
use crate::types::{Color, ShapeId};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG have
    /// very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a uniformly random element
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Shape, orientation and color for a freshly generated piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRoll {
    pub shape: ShapeId,
    pub orientation: usize,
    pub color: Color,
}

impl SimpleRng {
    /// Roll a random shape, one of its orientations, and a color
    pub fn roll_piece(&mut self) -> PieceRoll {
        let shape = self.pick(&ShapeId::ALL);
        let orientation = self.next_range(orientation_count(shape) as u32) as usize;
        let color = self.pick(&Color::ALL);
        PieceRoll {
            shape,
            orientation,
            color,
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
