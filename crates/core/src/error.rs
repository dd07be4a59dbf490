//! Engine error type.
//!
//! Precondition violations fail loudly at construction or spawn time;
//! they are never downgraded to silent no-ops. A lost game is *not* an
//! error - see [`crate::snake::MoveOutcome::Died`].

use std::fmt;

use tui_snake_types::Point;

/// Errors raised by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested start position does not leave room for the body
    /// between the head and the left wall.
    TooCloseToWall { start: Point, start_len: u32 },
    /// A cell the starting body must occupy is not empty.
    ObstructedStart { at: Point },
    /// A game parameter failed validation.
    InvalidConfig(&'static str),
    /// An apple must spawn but no empty cell exists.
    BoardFull,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::TooCloseToWall { start, start_len } => write!(
                f,
                "start position ({}, {}) too close to wall for length {}",
                start.x, start.y, start_len
            ),
            EngineError::ObstructedStart { at } => {
                write!(f, "starting cell ({}, {}) is not empty", at.x, at.y)
            }
            EngineError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            EngineError::BoardFull => write!(f, "no empty cell left to spawn an apple"),
        }
    }
}

impl std::error::Error for EngineError {}
