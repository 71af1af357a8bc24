//! Pieces module - shape catalog and orientation tables
//!
//! Every shape has a hand-authored list of orientations, each one four cell
//! offsets inside a 4x4 box. Rotating moves to the next entry of the list;
//! there is no pivot and no wall kick, so a rotation either fits where the
//! box already is or is rejected.

use crate::types::ShapeId;

/// Offset of a single cell relative to the piece box origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece box origin
pub type PieceShape = [MinoOffset; 4];

const SQUARE: [PieceShape; 1] = [[(2, 1), (1, 1), (2, 0), (1, 0)]];

const LINE: [PieceShape; 2] = [
    // Vertical
    [(1, 3), (1, 2), (1, 1), (1, 0)],
    // Horizontal
    [(3, 1), (2, 1), (1, 1), (0, 1)],
];

const S: [PieceShape; 2] = [
    [(2, 0), (1, 0), (1, 1), (0, 1)],
    [(1, 2), (1, 1), (0, 1), (0, 0)],
];

const Z: [PieceShape; 2] = [
    [(2, 1), (1, 1), (1, 0), (0, 0)],
    [(0, 2), (0, 1), (1, 1), (1, 0)],
];

const L: [PieceShape; 4] = [
    [(2, 2), (1, 2), (1, 1), (1, 0)],
    [(2, 1), (1, 1), (0, 1), (0, 2)],
    [(1, 2), (1, 1), (1, 0), (0, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
];

const J: [PieceShape; 4] = [
    [(0, 2), (1, 2), (1, 1), (1, 0)],
    [(2, 1), (1, 1), (0, 1), (0, 0)],
    [(1, 2), (1, 1), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];

const T: [PieceShape; 4] = [
    [(2, 1), (1, 1), (0, 1), (1, 0)],
    [(2, 1), (1, 2), (1, 1), (1, 0)],
    [(1, 2), (2, 1), (1, 1), (0, 1)],
    [(1, 2), (1, 1), (1, 0), (0, 1)],
];

/// All orientations of a shape, in rotation order
pub fn orientations(shape: ShapeId) -> &'static [PieceShape] {
    match shape {
        ShapeId::Square => &SQUARE,
        ShapeId::Line => &LINE,
        ShapeId::S => &S,
        ShapeId::Z => &Z,
        ShapeId::L => &L,
        ShapeId::J => &J,
        ShapeId::T => &T,
    }
}

/// Number of distinct orientations of a shape (1, 2 or 4)
pub fn orientation_count(shape: ShapeId) -> usize {
    orientations(shape).len()
}

/// Get the cell offsets for a shape in the given orientation
///
/// # Panics
///
/// Panics if `orientation` is not below [`orientation_count`]. Callers keep
/// orientations reduced with [`rotate`], so this only fires on a corrupted
/// piece.
pub fn get_shape(shape: ShapeId, orientation: usize) -> PieceShape {
    let table = orientations(shape);
    match table.get(orientation) {
        Some(cells) => *cells,
        None => panic!(
            "orientation {} out of range for {} ({} entries)",
            orientation,
            shape.as_str(),
            table.len()
        ),
    }
}

/// Orientation reached from `orientation` after `delta` rotation steps
pub fn rotate(shape: ShapeId, orientation: usize, delta: i8) -> usize {
    let count = orientation_count(shape) as i64;
    (orientation as i64 + delta as i64).rem_euclid(count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PIECE_BOX;

    #[test]
    fn test_orientation_counts() {
        assert_eq!(orientation_count(ShapeId::Square), 1);
        assert_eq!(orientation_count(ShapeId::Line), 2);
        assert_eq!(orientation_count(ShapeId::S), 2);
        assert_eq!(orientation_count(ShapeId::Z), 2);
        assert_eq!(orientation_count(ShapeId::L), 4);
        assert_eq!(orientation_count(ShapeId::J), 4);
        assert_eq!(orientation_count(ShapeId::T), 4);
    }

    #[test]
    fn test_offsets_fit_in_box_and_are_distinct() {
        for shape in ShapeId::ALL {
            for cells in orientations(shape) {
                for &(dx, dy) in cells {
                    assert!((0..PIECE_BOX as i8).contains(&dx));
                    assert!((0..PIECE_BOX as i8).contains(&dy));
                }
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(cells[i], cells[j], "{:?} repeats a cell", shape);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rotate_wraps_both_directions() {
        assert_eq!(rotate(ShapeId::T, 3, 1), 0);
        assert_eq!(rotate(ShapeId::T, 0, -1), 3);
        assert_eq!(rotate(ShapeId::Line, 1, 1), 0);
        assert_eq!(rotate(ShapeId::Square, 0, 1), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_shape_rejects_bad_orientation() {
        get_shape(ShapeId::Line, 2);
    }
}
