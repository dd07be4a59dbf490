//! Game configuration.

use tui_snake_types::{
    Point, DEFAULT_GRID_SIZE, DEFAULT_START_LEN, DEFAULT_START_POS, MIN_GRID_SIZE, MIN_START_LEN,
};

use crate::error::EngineError;

/// Parameters for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square grid, walls included.
    pub grid_size: usize,
    /// Head position at start; the body extends to its left.
    pub start_pos: Point,
    /// Starting body length (also the starting score).
    pub start_len: u32,
    /// Seed for apple placement.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start_pos: DEFAULT_START_POS,
            start_len: DEFAULT_START_LEN,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// A small board for quick tests.
    pub fn small() -> Self {
        Self {
            grid_size: 10,
            ..Self::default()
        }
    }

    /// Same configuration with a different apple seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the parameters that can be checked without a grid.
    ///
    /// The wall-distance precondition on the start position is enforced
    /// by snake construction itself.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(EngineError::InvalidConfig("grid size below minimum"));
        }
        if self.start_len < MIN_START_LEN {
            return Err(EngineError::InvalidConfig("start length below minimum"));
        }
        let last = self.grid_size as i32 - 1;
        let interior = |v: i32| v > 0 && v < last;
        if !interior(self.start_pos.x) || !interior(self.start_pos.y) {
            return Err(EngineError::InvalidConfig("start position on or outside walls"));
        }
        Ok(())
    }
}
