//! Board module - the playfield of settled cells
//!
//! The playfield is a 10x20 grid where each cell is empty or holds the color
//! of the piece that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::display::{Drawable, Frame};
use crate::piece::Piece;
use crate::types::{Cell, CellArea, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a single position is inside the grid and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a piece may occupy all of `cells`.
    ///
    /// Every cell has to be inside the grid and empty.
    pub fn is_valid(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write a piece's cells into the grid with its color.
    ///
    /// No validation happens here; the engine only locks placements it has
    /// already checked. Cells outside the grid are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Remove every full row at once and return how many were removed.
    pub fn clear_completed_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Rows are compacted in a single bottom-up pass with a write cursor, so
    /// contiguous and scattered full rows are handled alike. Remaining rows keep
    /// their order and the freed rows at the top come back empty.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles overlap without allocating
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Number of occupied cells (handy for tests and logging)
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, top row is 0
    ///
    /// # Panics
    ///
    /// Panics if `y` is not below the board height.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Fill a whole row with one color, leaving the listed columns empty.
    ///
    /// Setup helper for tests and benches that need a prepared playfield
    /// (see [`GameEngine::with_playfield`](crate::GameEngine::with_playfield));
    /// the game itself only fills cells through [`Playfield::lock`].
    pub fn fill_row_except(&mut self, y: i8, color: Color, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(color) };
            self.set(x, y, cell);
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Playfield {
    /// Paint every settled cell; `visible = false` paints the grid empty
    fn draw(&self, visible: bool, frame: &mut Frame) {
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let color = if visible { self.get(x, y).flatten() } else { None };
                frame.paint_cell(CellArea::Playfield, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeId;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Playfield::index(0, 0), Some(0));
        assert_eq!(Playfield::index(9, 0), Some(9));
        assert_eq!(Playfield::index(0, 1), Some(10));
        assert_eq!(Playfield::index(9, 19), Some(199));
        assert_eq!(Playfield::index(-1, 0), None);
        assert_eq!(Playfield::index(10, 0), None);
        assert_eq!(Playfield::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Playfield::new();

        board.set(0, 0, Some(Color::Red));
        board.set(5, 10, Some(Color::Blue));

        assert_eq!(board.get(0, 0), Some(Some(Color::Red)));
        assert_eq!(board.get(5, 10), Some(Some(Color::Blue)));

        assert_eq!(board.cells[0], Some(Color::Red));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Blue));
    }

    #[test]
    fn test_lock_writes_piece_color() {
        let mut board = Playfield::new();
        let mut piece = Piece::new(ShapeId::Square, 0, Color::Fuchsia);
        piece.place_at_spawn();

        board.lock(&piece);

        for (x, y) in piece.cells() {
            assert_eq!(board.get(x, y), Some(Some(Color::Fuchsia)));
        }
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Playfield::new();
        for y in 10..20 {
            board.fill_row_except(y, Color::White, &[]);
        }
        board.set(2, 9, Some(Color::Red));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 10);
        assert_eq!(cleared[0], 19);
        assert_eq!(board.get(2, 19), Some(Some(Color::Red)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_draw_paints_every_cell() {
        let mut board = Playfield::new();
        board.set(3, 4, Some(Color::Green));
        let mut frame = Frame::new();
        board.draw(true, &mut frame);
        assert_eq!(frame.len(), BOARD_SIZE);
        assert!(frame.ops().contains(&crate::display::DrawOp::Cell {
            area: CellArea::Playfield,
            x: 3,
            y: 4,
            color: Some(Color::Green),
        }));
    }
}
