//! Session module - the per-game context
//!
//! Ties the grid, snake, and turn scheduler together and owns the
//! mutable run state (score, terminal flag) that the original kept in
//! globals. One mutation path per tick, driven from outside; the
//! session never blocks and holds no I/O.

use tui_snake_types::{Cell, Direction, Point};

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::{MoveOutcome, Snake};
use crate::snapshot::{SegmentSnapshot, SessionSnapshot};
use crate::turn::TurnScheduler;

/// A running (or finished) game.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    scheduler: TurnScheduler,
    rng: SimpleRng,
    score: u32,
    game_over: bool,
}

impl GameSession {
    /// Build a fresh session: walls, snake, first apple.
    ///
    /// Fails loudly on any precondition violation; a session is never
    /// partially built.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut grid = Grid::new(config.grid_size);
        grid.build_walls();
        let snake = Snake::new(config.start_pos, config.start_len, &mut grid)?;
        let mut rng = SimpleRng::new(config.seed);
        grid.spawn_apple(&mut rng)?;

        Ok(Self {
            grid,
            snake,
            scheduler: TurnScheduler::new(),
            rng,
            score: config.start_len,
            game_over: false,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// Applies at most one buffered direction change, moves the snake,
    /// and handles growth and apple respawn. After a fatal collision the
    /// session is terminal: further ticks mutate nothing and keep
    /// returning [`MoveOutcome::Died`].
    pub fn tick(&mut self) -> Result<MoveOutcome, EngineError> {
        if self.game_over {
            return Ok(MoveOutcome::Died);
        }

        let turned = match self.scheduler.take() {
            Some(direction) => {
                self.snake.set_direction(direction);
                true
            }
            None => false,
        };

        let outcome = self.snake.advance(&mut self.grid, turned);
        match outcome {
            MoveOutcome::Died => {
                self.game_over = true;
            }
            MoveOutcome::Ate => {
                self.score += 1;
                self.grid.spawn_apple(&mut self.rng)?;
            }
            MoveOutcome::Advanced => {}
        }

        self.scheduler.reset();
        Ok(outcome)
    }

    /// Feed a raw directional intent into the turn scheduler.
    ///
    /// Returns whether the change was accepted for the next tick.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        self.scheduler.request(self.snake.direction(), direction)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for drivers that relocate the apple or set up
    /// scenarios. The engine's own invariants are maintained by `tick`.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Copy the observable state into an existing snapshot, reusing its
    /// allocations.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.width = self.grid.size() as u16;
        out.height = self.grid.size() as u16;
        out.cells.extend(self.grid.cells().iter().map(Cell::code));
        out.direction = self.snake.direction();
        out.score = self.score;
        out.game_over = self.game_over;

        for point in self.snake.segments() {
            if let Cell::Body(seg) = self.grid.get(point.x, point.y) {
                out.segments.push(SegmentSnapshot {
                    x: point.x,
                    y: point.y,
                    piece: seg.piece,
                    orientation: seg.orientation,
                    direction: seg.direction,
                });
            }
        }
    }

    /// Allocate a fresh snapshot of the observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Current apple position. Exactly one exists while the game runs.
    pub fn apple(&self) -> Option<Point> {
        self.grid
            .iter()
            .find(|(_, cell)| matches!(cell, Cell::Apple))
            .map(|(p, _)| p)
    }
}
