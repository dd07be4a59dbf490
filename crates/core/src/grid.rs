//! Grid module - manages the game playfield
//!
//! The grid is an N x N matrix of cells stored as a flat array for better
//! cache locality (row-major, index = `y * N + x`). Cells are plain values;
//! nothing is heap-allocated per cell and no cell is aliased from elsewhere.
//!
//! The grid does not track the snake directly - it reflects snake topology
//! through the Body cells the snake writes into it.

use tui_snake_types::{Cell, Point};

use crate::error::EngineError;
use crate::rng::SimpleRng;

/// The playfield - a square cell matrix with a permanent wall border.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-empty grid of `size x size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (x, y) lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.size && y >= 0 && (y as usize) < self.size
    }

    /// Calculate flat index from (x, y) coordinates.
    ///
    /// Out-of-bounds coordinates are a programming error: the automaton
    /// only ever queries orthogonal neighbors of in-bounds positions that
    /// are guarded by walls, so this fails fast instead of clamping.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.size,
            self.size
        );
        (y as usize) * self.size + (x as usize)
    }

    /// Get the cell at (x, y). Panics when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at (x, y). Panics when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Overwrite every border cell with a Wall.
    ///
    /// Idempotent, but intended to run exactly once at setup; walls are
    /// never overwritten afterward.
    pub fn build_walls(&mut self) {
        let last = self.size - 1;
        for y in 0..self.size {
            for x in 0..self.size {
                if x == 0 || x == last || y == 0 || y == last {
                    self.cells[y * self.size + x] = Cell::Wall;
                }
            }
        }
    }

    /// Coordinates of all Empty cells, in row-major order.
    ///
    /// Pure scan with no side effects; used as the sampling domain for
    /// apple placement.
    pub fn find_empty_cells(&self) -> Vec<Point> {
        let mut empty = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[y * self.size + x].is_empty() {
                    empty.push(Point::new(x as i32, y as i32));
                }
            }
        }
        empty
    }

    /// Place an apple on a uniformly chosen empty cell.
    ///
    /// Precondition: at least one empty cell exists. A full board yields
    /// [`EngineError::BoardFull`] - the apple is never placed on a
    /// non-empty cell and the failure is never silent.
    pub fn spawn_apple(&mut self, rng: &mut SimpleRng) -> Result<Point, EngineError> {
        let empty = self.find_empty_cells();
        let target = *rng.choose(&empty).ok_or(EngineError::BoardFull)?;
        self.set(target.x, target.y, Cell::Apple);
        Ok(target)
    }

    /// Read-only iteration over all cells with their coordinates,
    /// row-major. This is the drawing/replication surface.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % size) as i32;
            let y = (i / size) as i32;
            (Point::new(x, y), cell)
        })
    }

    /// The raw flat cell slice (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(8);
        assert_eq!(grid.size(), 8);
        for (_, cell) in grid.iter() {
            assert_eq!(*cell, Cell::Empty);
        }
    }

    #[test]
    fn test_build_walls_borders_only() {
        for size in [5usize, 8, 20] {
            let mut grid = Grid::new(size);
            grid.build_walls();
            let last = (size - 1) as i32;
            for (p, cell) in grid.iter() {
                if p.x == 0 || p.x == last || p.y == 0 || p.y == last {
                    assert_eq!(*cell, Cell::Wall, "border ({}, {})", p.x, p.y);
                } else {
                    assert_eq!(*cell, Cell::Empty, "interior ({}, {})", p.x, p.y);
                }
            }
        }
    }

    #[test]
    fn test_build_walls_idempotent() {
        let mut grid = Grid::new(6);
        grid.build_walls();
        let once = grid.clone();
        grid.build_walls();
        assert_eq!(grid, once);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(6);
        grid.set(2, 3, Cell::Apple);
        assert_eq!(grid.get(2, 3), Cell::Apple);
        grid.set(2, 3, Cell::Empty);
        assert_eq!(grid.get(2, 3), Cell::Empty);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(6);
        let _ = grid.get(-1, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(6);
        grid.set(0, 6, Cell::Wall);
    }

    #[test]
    fn test_find_empty_cells_row_major() {
        let mut grid = Grid::new(5);
        grid.build_walls();
        let empty = grid.find_empty_cells();
        // 3x3 interior on a 5x5 grid.
        assert_eq!(empty.len(), 9);
        assert_eq!(empty[0], Point::new(1, 1));
        assert_eq!(empty[8], Point::new(3, 3));
        // Row-major: each point sorts after the previous one.
        for pair in empty.windows(2) {
            assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
        }
    }

    #[test]
    fn test_spawn_apple_places_exactly_one() {
        let mut grid = Grid::new(10);
        grid.build_walls();
        let before = grid.find_empty_cells();
        let mut rng = SimpleRng::new(99);

        let placed = grid.spawn_apple(&mut rng).unwrap();
        assert!(before.contains(&placed), "apple must land on an empty cell");

        let apples: Vec<_> = grid
            .iter()
            .filter(|(_, c)| matches!(c, Cell::Apple))
            .collect();
        assert_eq!(apples.len(), 1);
        assert_eq!(apples[0].0, placed);
    }

    #[test]
    fn test_spawn_apple_deterministic_per_seed() {
        let mut a = Grid::new(10);
        let mut b = Grid::new(10);
        a.build_walls();
        b.build_walls();
        let mut rng_a = SimpleRng::new(7);
        let mut rng_b = SimpleRng::new(7);
        assert_eq!(
            a.spawn_apple(&mut rng_a).unwrap(),
            b.spawn_apple(&mut rng_b).unwrap()
        );
    }

    #[test]
    fn test_spawn_apple_full_board_errors() {
        let mut grid = Grid::new(5);
        grid.build_walls();
        for p in grid.find_empty_cells() {
            grid.set(p.x, p.y, Cell::Wall);
        }
        let mut rng = SimpleRng::new(1);
        assert_eq!(grid.spawn_apple(&mut rng), Err(EngineError::BoardFull));
    }
}
