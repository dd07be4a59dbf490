//! Grid tests - wall and apple placement properties

use tui_snake::core::{Grid, SimpleRng};
use tui_snake::types::{Cell, Point};

#[test]
fn test_walls_cover_exactly_the_border() {
    for size in [5usize, 7, 12, 20, 31] {
        let mut grid = Grid::new(size);
        // Pre-mark one interior cell to prove build_walls leaves it alone.
        grid.set(2, 2, Cell::Apple);
        grid.build_walls();

        let last = (size - 1) as i32;
        for (p, cell) in grid.iter() {
            let on_border = p.x == 0 || p.x == last || p.y == 0 || p.y == last;
            if on_border {
                assert_eq!(*cell, Cell::Wall, "({}, {}) must be wall", p.x, p.y);
            } else if p == Point::new(2, 2) {
                assert_eq!(*cell, Cell::Apple, "interior cells are unchanged");
            } else {
                assert_eq!(*cell, Cell::Empty);
            }
        }
    }
}

#[test]
fn test_spawn_apple_only_on_previously_empty_cells() {
    let mut rng = SimpleRng::new(1234);
    let mut grid = Grid::new(12);
    grid.build_walls();

    for _ in 0..50 {
        let empty_before = grid.find_empty_cells();
        let placed = grid.spawn_apple(&mut rng).unwrap();
        assert!(empty_before.contains(&placed));

        let apples = grid
            .iter()
            .filter(|(_, c)| matches!(c, Cell::Apple))
            .count();
        assert_eq!(apples, 1, "exactly one apple after each spawn");

        // Eat it back so the next round starts clean.
        grid.set(placed.x, placed.y, Cell::Empty);
    }
}

#[test]
fn test_spawn_apple_on_full_board_is_an_error() {
    let mut grid = Grid::new(6);
    grid.build_walls();
    for p in grid.find_empty_cells() {
        grid.set(p.x, p.y, Cell::Apple);
    }
    let mut rng = SimpleRng::new(1);
    assert!(grid.spawn_apple(&mut rng).is_err());
}

#[test]
fn test_find_empty_cells_is_row_major_and_complete() {
    let mut grid = Grid::new(8);
    grid.build_walls();
    let empty = grid.find_empty_cells();

    assert_eq!(empty.len(), 36); // 6x6 interior
    for pair in empty.windows(2) {
        assert!(
            (pair[0].y, pair[0].x) < (pair[1].y, pair[1].x),
            "scan order must be row-major"
        );
    }
}
