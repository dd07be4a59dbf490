//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, network replication).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid of `N x N` cells (default 20), with the
//! outermost ring of cells permanently occupied by walls. Coordinates are
//! 0-indexed with `x` = column and `y` = row, so the playable interior is
//! `1..N-1` on both axes.
//!
//! # Orientation Angles
//!
//! Each body segment carries a rendering rotation, one of 0/90/180/270
//! degrees. The facing-to-angle mapping is a fixed lookup:
//!
//! | Direction | Angle |
//! |-----------|-------|
//! | Up        | 0     |
//! | Left      | 90    |
//! | Down      | 180   |
//! | Right     | 270   |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, Point};
//!
//! let dir = Direction::Right;
//! assert_eq!(dir.opposite(), Direction::Left);
//! assert_eq!(dir.angle(), 270);
//!
//! // Stepping a point moves it one cell in the given direction.
//! let head = Point::new(4, 2);
//! assert_eq!(head.step(Direction::Right), Point::new(5, 2));
//! assert_eq!(head.step(Direction::Up), Point::new(4, 1));
//!
//! // Cells expose the numeric kind code used by snapshots.
//! assert_eq!(Cell::Empty.code(), 0);
//! assert_eq!(Cell::Apple.code(), 3);
//! ```

/// Default side length of the (square) grid, walls included.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Smallest grid that leaves a playable interior.
pub const MIN_GRID_SIZE: usize = 5;

/// Default starting length of the snake (also the starting score).
pub const DEFAULT_START_LEN: u32 = 3;

/// Minimum snake length; the head/tail classification assumes length >= 2.
pub const MIN_START_LEN: u32 = 2;

/// Default head position at game start.
pub const DEFAULT_START_POS: Point = Point { x: 4, y: 2 };

/// Simulation step interval for the terminal driver (milliseconds).
pub const TICK_MS: u64 = 150;

/// A grid coordinate, `x` = column, `y` = row, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one cell away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another point.
    pub fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Axis-aligned facing of the snake. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The exact reverse of this direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit offset in grid coordinates (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rendering rotation for a segment facing this way.
    ///
    /// Fixed lookup, not derived by formula: Up=0, Left=90, Down=180,
    /// Right=270.
    pub fn angle(self) -> u16 {
        match self {
            Direction::Up => 0,
            Direction::Left => 90,
            Direction::Down => 180,
            Direction::Right => 270,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Rendering classification of a body segment. Derived state, never
/// player-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Head,
    Tail,
    Straight,
    Turn,
}

impl PieceKind {
    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Head => "head",
            PieceKind::Tail => "tail",
            PieceKind::Straight => "straight",
            PieceKind::Turn => "turn",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "head" => Some(PieceKind::Head),
            "tail" => Some(PieceKind::Tail),
            "straight" => Some(PieceKind::Straight),
            "turn" => Some(PieceKind::Turn),
            _ => None,
        }
    }
}

/// Per-segment state stored in the grid's Body cells.
///
/// `previous_direction` is the facing the segment had before its last
/// turn; for segments that never turned it equals `direction`. The tail
/// classification reads it when a former corner becomes the tail end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub direction: Direction,
    pub previous_direction: Direction,
    pub piece: PieceKind,
    /// One of 0/90/180/270.
    pub orientation: u16,
}

/// One grid cell. Stored by value in a flat array; coordinates are
/// implied by the array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Body(Segment),
    Apple,
}

impl Cell {
    /// Numeric cell-kind code used in snapshots: 0 Empty, 1 Wall,
    /// 2 Body, 3 Apple.
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Body(_) => 2,
            Cell::Apple => 3,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Wall or Body: moving into this cell kills the snake.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Cell::Wall | Cell::Body(_))
    }

    /// The segment state if this is a Body cell.
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Cell::Body(seg) => Some(seg),
            _ => None,
        }
    }
}
