//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical apple placement
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, replicated)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N cell matrix with walls and apple placement
//! - [`snake`]: the tick-driven movement automaton (collision, growth)
//! - [`shape`]: segment shape/orientation classification
//! - [`turn`]: direction-change buffering between ticks
//! - [`session`]: the per-game context owning grid, snake, and score
//! - [`snapshot`]: owned copies of session state for views and replication
//! - [`rng`]: seeded LCG used for apple placement
//! - [`config`]: game parameters and validation
//!
//! # Game Rules
//!
//! - The snake advances exactly one axis-aligned cell per tick.
//! - Moving into a Wall or Body cell is fatal; the session becomes terminal
//!   and no further mutation occurs.
//! - Moving onto an Apple grows the snake by one segment, increments the
//!   score, and respawns the apple on a uniformly chosen empty cell.
//! - At most one direction change is accepted between ticks, and reversing
//!   into the snake's own neck is rejected outright.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//! assert_eq!(session.score(), 3);
//!
//! // Drive one simulation step.
//! let outcome = session.tick().unwrap();
//! assert_ne!(outcome, MoveOutcome::Died);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snake;
pub mod snapshot;
pub mod turn;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::EngineError;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snake::{MoveOutcome, Snake};
pub use snapshot::{SegmentSnapshot, SessionSnapshot};
pub use turn::TurnScheduler;
