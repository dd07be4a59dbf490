//! Turn module - buffers directional intent between ticks
//!
//! Raw key presses arrive faster than the simulation ticks. The
//! scheduler accepts at most one direction change per tick, drops
//! requests that match the current facing, and rejects exact reversals
//! (which would fold the snake into its own neck). The accepted change
//! is applied atomically at the next move.

use tui_snake_types::Direction;

/// One-slot buffer for pending direction changes.
#[derive(Debug, Clone)]
pub struct TurnScheduler {
    pending: Option<Direction>,
    can_turn: bool,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self {
            pending: None,
            can_turn: true,
        }
    }

    /// Request a direction change relative to the snake's current facing.
    ///
    /// Returns whether the request was accepted. Ignored (same direction)
    /// and rejected (reversal) requests do not consume the per-tick
    /// latch; only an accepted change does.
    pub fn request(&mut self, current: Direction, requested: Direction) -> bool {
        if !self.can_turn {
            return false;
        }
        if requested == current || requested == current.opposite() {
            return false;
        }
        self.pending = Some(requested);
        self.can_turn = false;
        true
    }

    /// Take the pending change for this tick, if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    /// Re-arm the latch. Called exactly once per tick, after the move.
    pub fn reset(&mut self) {
        self.can_turn = true;
    }

    /// Whether a change is currently buffered.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new()
    }
}
