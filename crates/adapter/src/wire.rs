//! Wire types - the serialized `(grid, snake, score)` snapshot
//!
//! Mirrors of the core snapshot types with stable serde names, so the
//! on-wire JSON shape is independent of engine-internal representation.

use serde::{Deserialize, Serialize};

use tui_snake_core::snapshot::{SegmentSnapshot, SessionSnapshot};
use tui_snake_types::{Direction, PieceKind};

/// Connection-close request payload.
pub const DISCONNECT_MESSAGE: &str = "!disconnect";

/// Marker sent before the snapshot frame.
pub const GAME_MESSAGE: &str = "!sending_game";

/// Acknowledgment sent for every request.
/// Historical spelling preserved for wire compatibility.
pub const ACK_MESSAGE: &str = "msg recieved";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionWire {
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "left")]
    Left,
}

impl From<Direction> for DirectionWire {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => Self::Up,
            Direction::Right => Self::Right,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
        }
    }
}

impl From<DirectionWire> for Direction {
    fn from(value: DirectionWire) -> Self {
        match value {
            DirectionWire::Up => Direction::Up,
            DirectionWire::Right => Direction::Right,
            DirectionWire::Down => Direction::Down,
            DirectionWire::Left => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKindWire {
    #[serde(rename = "head")]
    Head,
    #[serde(rename = "tail")]
    Tail,
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "turn")]
    Turn,
}

impl From<PieceKind> for PieceKindWire {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::Head => Self::Head,
            PieceKind::Tail => Self::Tail,
            PieceKind::Straight => Self::Straight,
            PieceKind::Turn => Self::Turn,
        }
    }
}

impl From<PieceKindWire> for PieceKind {
    fn from(value: PieceKindWire) -> Self {
        match value {
            PieceKindWire::Head => PieceKind::Head,
            PieceKindWire::Tail => PieceKind::Tail,
            PieceKindWire::Straight => PieceKind::Straight,
            PieceKindWire::Turn => PieceKind::Turn,
        }
    }
}

/// Grid contents: dimensions plus row-major cell-kind codes
/// (0 Empty, 1 Wall, 2 Body, 3 Apple).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridWire {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<u8>,
}

/// One body segment with its rendering classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentWire {
    pub x: i32,
    pub y: i32,
    pub piece: PieceKindWire,
    pub orientation: u16,
    pub direction: DirectionWire,
}

impl From<&SegmentSnapshot> for SegmentWire {
    fn from(value: &SegmentSnapshot) -> Self {
        Self {
            x: value.x,
            y: value.y,
            piece: value.piece.into(),
            orientation: value.orientation,
            direction: value.direction.into(),
        }
    }
}

/// Snake contents: facing plus the tail-first segment chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeWire {
    pub direction: DirectionWire,
    pub segments: Vec<SegmentWire>,
}

/// The serialized `(grid, snake, score)` tuple sent after the
/// "sending game" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMessage {
    pub grid: GridWire,
    pub snake: SnakeWire,
    pub score: u32,
    #[serde(rename = "game_over")]
    pub game_over: bool,
}

impl From<&SessionSnapshot> for GameMessage {
    fn from(snap: &SessionSnapshot) -> Self {
        Self {
            grid: GridWire {
                width: snap.width,
                height: snap.height,
                cells: snap.cells.clone(),
            },
            snake: SnakeWire {
                direction: snap.direction.into(),
                segments: snap.segments.iter().map(SegmentWire::from).collect(),
            },
            score: snap.score,
            game_over: snap.game_over,
        }
    }
}

impl GameMessage {
    /// Rebuild a session snapshot on the receiving side.
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            width: self.grid.width,
            height: self.grid.height,
            cells: self.grid.cells.clone(),
            segments: self
                .snake
                .segments
                .iter()
                .map(|s| SegmentSnapshot {
                    x: s.x,
                    y: s.y,
                    piece: s.piece.into(),
                    orientation: s.orientation,
                    direction: s.direction.into(),
                })
                .collect(),
            direction: self.snake.direction.into(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}
