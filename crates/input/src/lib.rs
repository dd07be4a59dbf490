//! Input module - terminal key events to directional intents
//!
//! A thin collaborator: it only maps crossterm key events onto
//! [`Direction`](tui_snake_types::Direction) values and quit requests.
//! The no-reversal and once-per-tick rules live in the engine's turn
//! scheduler, not here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{map_key_event, should_quit};
