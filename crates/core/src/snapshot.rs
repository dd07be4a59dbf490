//! Snapshot module - owned copies of session state
//!
//! Views and the replication layer must never alias live engine
//! structures: the engine keeps mutating between reads. A snapshot is a
//! plain owned value copied out of the session; once taken it is
//! immutable as far as the engine is concerned.

use tui_snake_types::{Direction, PieceKind, Point};

/// One body segment as seen by a view, tail-first in
/// [`SessionSnapshot::segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSnapshot {
    pub x: i32,
    pub y: i32,
    pub piece: PieceKind,
    /// One of 0/90/180/270.
    pub orientation: u16,
    pub direction: Direction,
}

/// A full copy of the observable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cell-kind codes (`y * width + x`):
    /// 0 Empty, 1 Wall, 2 Body, 3 Apple.
    pub cells: Vec<u8>,
    /// Body segments, tail-first.
    pub segments: Vec<SegmentSnapshot>,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// Reset to an empty snapshot, keeping allocations.
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.segments.clear();
        self.direction = Direction::Right;
        self.score = 0;
        self.game_over = false;
    }

    /// Cell-kind code at (x, y), if in bounds.
    pub fn cell_code(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Segment info at (x, y), if a body segment sits there.
    pub fn segment_at(&self, x: i32, y: i32) -> Option<&SegmentSnapshot> {
        self.segments.iter().find(|s| s.x == x && s.y == y)
    }

    /// Head coordinate, if the snake is present.
    pub fn head(&self) -> Option<Point> {
        self.segments.last().map(|s| Point::new(s.x, s.y))
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            segments: Vec::new(),
            direction: Direction::Right,
            score: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_code_bounds() {
        let snap = SessionSnapshot {
            width: 2,
            height: 2,
            cells: vec![0, 1, 2, 3],
            ..SessionSnapshot::default()
        };
        assert_eq!(snap.cell_code(0, 0), Some(0));
        assert_eq!(snap.cell_code(1, 1), Some(3));
        assert_eq!(snap.cell_code(2, 0), None);
        assert_eq!(snap.cell_code(0, 2), None);
    }

    #[test]
    fn test_clear_keeps_nothing_observable() {
        let mut snap = SessionSnapshot {
            width: 2,
            height: 2,
            cells: vec![1; 4],
            score: 9,
            game_over: true,
            ..SessionSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, SessionSnapshot::default());
    }
}
