//! Playfield tests - validity, locking and line clearing

use std::collections::HashSet;

use tetris_tty::core::{orientation_count, Piece, Placement, Playfield};
use tetris_tty::types::{Color, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_playfield_new_empty() {
    let playfield = Playfield::new();
    assert_eq!(playfield.width(), BOARD_WIDTH);
    assert_eq!(playfield.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(playfield.is_free(x, y), "Cell ({}, {}) should be free", x, y);
        }
    }
    assert_eq!(playfield.occupied_count(), 0);
}

#[test]
fn test_validity_bounds() {
    let playfield = Playfield::new();

    assert!(playfield.is_valid(&[(0, 0), (9, 0), (0, 19), (9, 19)]));
    assert!(!playfield.is_valid(&[(0, 0), (-1, 0)]));
    assert!(!playfield.is_valid(&[(10, 5)]));
    assert!(!playfield.is_valid(&[(5, -1)]));
    assert!(!playfield.is_valid(&[(5, 20)]));
}

#[test]
fn test_validity_occupancy() {
    let mut playfield = Playfield::new();
    playfield.set(4, 10, Some(Color::Red));

    assert!(!playfield.is_valid(&[(3, 10), (4, 10)]));
    assert!(playfield.is_valid(&[(3, 10), (5, 10)]));
    assert!(playfield.is_occupied(4, 10));
}

#[test]
fn test_validity_matches_bounds_and_occupancy_everywhere() {
    let occupied: HashSet<(i8, i8)> = [(0, 19), (4, 19), (5, 18), (9, 10), (3, 3), (6, 0)]
        .into_iter()
        .collect();
    let mut playfield = Playfield::new();
    for &(x, y) in &occupied {
        playfield.set(x, y, Some(Color::White));
    }

    for shape in ShapeId::ALL {
        for orientation in 0..orientation_count(shape) {
            let mut piece = Piece::new(shape, orientation, Color::Red);
            for x in -3..13 {
                for y in -3..23 {
                    piece.commit(Placement { x, y, orientation });
                    let cells = piece.cells();
                    let expected = cells.iter().all(|&(cx, cy)| {
                        (0..BOARD_WIDTH as i8).contains(&cx)
                            && (0..BOARD_HEIGHT as i8).contains(&cy)
                            && !occupied.contains(&(cx, cy))
                    });
                    assert_eq!(
                        playfield.is_valid(&cells),
                        expected,
                        "{:?} orientation {} at ({}, {})",
                        shape,
                        orientation,
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_simultaneous_clear_compacts_rows() {
    let mut playfield = Playfield::new();
    playfield.fill_row_except(19, Color::Blue, &[]);
    playfield.fill_row_except(18, Color::Green, &[3]);
    playfield.fill_row_except(17, Color::Blue, &[]);
    playfield.set(7, 16, Some(Color::Cyan));

    assert_eq!(playfield.clear_completed_lines(), 2);

    // row 18 drops to the bottom, the marker from row 16 lands on row 18
    assert_eq!(playfield.get(3, 19), Some(None));
    assert_eq!(playfield.get(0, 19), Some(Some(Color::Green)));
    assert_eq!(playfield.get(7, 18), Some(Some(Color::Cyan)));
    assert_eq!(playfield.occupied_count(), 10);
    assert!(playfield.row(0).iter().all(|cell| cell.is_none()));
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut playfield = Playfield::new();
    playfield.fill_row_except(19, Color::White, &[9]);
    let before = playfield.clone();

    assert_eq!(playfield.clear_completed_lines(), 0);
    assert_eq!(playfield, before);
}

#[test]
fn test_top_row_can_be_cleared() {
    let mut playfield = Playfield::new();
    playfield.fill_row_except(0, Color::Red, &[]);

    let cleared = playfield.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    assert_eq!(playfield.occupied_count(), 0);
}

#[test]
fn test_vertical_line_completes_bottom_row() {
    let mut playfield = Playfield::new();
    playfield.fill_row_except(19, Color::Yellow, &[0]);

    let mut line = Piece::new(ShapeId::Line, 0, Color::Red);
    line.place_at_spawn();
    line.commit(Placement {
        x: -1,
        y: 16,
        orientation: 0,
    });
    assert!(playfield.is_valid(&line.cells()));

    playfield.lock(&line);
    assert_eq!(playfield.clear_completed_lines(), 1);

    for y in 17..20 {
        assert_eq!(playfield.get(0, y), Some(Some(Color::Red)));
    }
    assert_eq!(playfield.occupied_count(), 3);
}
