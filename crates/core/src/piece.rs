//! Piece module - a tetromino instance on screen
//!
//! A piece starts life in the next-piece preview, is moved to the spawn
//! point when it becomes the current piece, and is copied into the
//! playfield when it locks.

use crate::display::{Drawable, Frame, ScreenItem};
use crate::pieces::{get_shape, orientation_count, rotate};
use crate::rng::PieceRoll;
use crate::types::{CellArea, Color, ShapeId, SPAWN_X, SPAWN_Y};

/// Position and orientation of a piece box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i8,
    pub y: i8,
    pub orientation: usize,
}

/// A tetromino with position, color and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: ShapeId,
    placement: Placement,
    color: Color,
    visible: bool,
    area: CellArea,
}

impl Piece {
    /// Create a piece at the box origin of the preview area
    ///
    /// The orientation is reduced modulo the shape's orientation count.
    pub fn new(shape: ShapeId, orientation: usize, color: Color) -> Self {
        Self {
            shape,
            placement: Placement {
                x: 0,
                y: 0,
                orientation: orientation % orientation_count(shape),
            },
            color,
            visible: true,
            area: CellArea::Preview,
        }
    }

    pub fn from_roll(roll: PieceRoll) -> Self {
        Self::new(roll.shape, roll.orientation, roll.color)
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn orientation(&self) -> usize {
        self.placement.orientation
    }

    pub fn x(&self) -> i8 {
        self.placement.x
    }

    pub fn y(&self) -> i8 {
        self.placement.y
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> CellArea {
        self.area
    }

    /// Absolute cells at the current placement
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.cells_at(self.placement)
    }

    /// Absolute cells the piece would cover at `placement`
    pub fn cells_at(&self, placement: Placement) -> [(i8, i8); 4] {
        get_shape(self.shape, placement.orientation)
            .map(|(dx, dy)| (placement.x + dx, placement.y + dy))
    }

    /// Placement after moving by (dx, dy) and rotating by `dr` steps.
    ///
    /// Pure: the piece itself is not changed.
    pub fn candidate(&self, dx: i8, dy: i8, dr: i8) -> Placement {
        Placement {
            x: self.placement.x + dx,
            y: self.placement.y + dy,
            orientation: rotate(self.shape, self.placement.orientation, dr),
        }
    }

    /// Adopt a placement that has already been validated
    pub fn commit(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Move to the spawn point of the playfield, keeping the orientation
    pub fn place_at_spawn(&mut self) {
        self.placement.x = SPAWN_X;
        self.placement.y = SPAWN_Y;
        self.area = CellArea::Playfield;
        self.visible = true;
    }
}

impl Drawable for Piece {
    fn draw(&self, visible: bool, frame: &mut Frame) {
        let color = visible.then_some(self.color);
        for (x, y) in self.cells() {
            frame.paint_cell(self.area, x, y, color);
        }
    }
}

impl ScreenItem for Piece {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
