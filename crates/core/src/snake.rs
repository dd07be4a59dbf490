//! Snake module - the tick-driven movement automaton
//!
//! The body is an ordered chain of grid coordinates, tail-first and
//! head-last: the head is pushed at the back, the tail popped at the
//! front. Segment classification lives in the grid's Body cells; the
//! chain itself stores positions only, so segment identity is positional
//! rather than pointer-based.

use std::collections::VecDeque;

use tui_snake_types::{Cell, Direction, PieceKind, Point, Segment};

use crate::error::EngineError;
use crate::grid::Grid;
use crate::shape;

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved onto an empty cell; the tail advanced too.
    Advanced,
    /// Moved onto the apple; the snake grew by one segment.
    Ate,
    /// Hit a wall or its own body; the game is over.
    Died,
}

/// The snake: body chain plus current facing.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Tail-first, head-last chain of occupied coordinates.
    body: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    /// Build the starting snake with its head at `start`, body extending
    /// to the left, facing Right.
    ///
    /// Fails loudly instead of producing a partially-built snake: the
    /// start must leave room for the whole body inside the left wall
    /// (`start.x >= start_len + 1`) and every starting cell must be
    /// empty.
    pub fn new(start: Point, start_len: u32, grid: &mut Grid) -> Result<Self, EngineError> {
        if start.x < start_len as i32 + 1 {
            return Err(EngineError::TooCloseToWall { start, start_len });
        }

        let first_x = start.x - start_len as i32 + 1;
        for x in first_x..=start.x {
            let at = Point::new(x, start.y);
            if !grid.get(at.x, at.y).is_empty() {
                return Err(EngineError::ObstructedStart { at });
            }
        }

        let mut body = VecDeque::with_capacity(start_len as usize + 1);
        for x in first_x..=start.x {
            let piece = if x == first_x {
                PieceKind::Tail
            } else if x == start.x {
                PieceKind::Head
            } else {
                PieceKind::Straight
            };
            let seg = Segment {
                direction: Direction::Right,
                previous_direction: Direction::Right,
                piece,
                orientation: Direction::Right.angle(),
            };
            grid.set(x, start.y, Cell::Body(seg));
            body.push_back(Point::new(x, start.y));
        }

        Ok(Self {
            body,
            direction: Direction::Right,
        })
    }

    /// Current head coordinate.
    pub fn head(&self) -> Point {
        *self.body.back().expect("snake body is never empty")
    }

    /// Current tail coordinate.
    pub fn tail(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    /// Body length in segments.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply an already-validated direction change. Callers must only
    /// pass directions orthogonal to or equal to the current one - the
    /// scheduler enforces the no-reversal rule, not the snake.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Tail-first iteration over the occupied coordinates.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Advance one cell in the current direction.
    ///
    /// `turned` marks that a direction change was applied this tick; it
    /// triggers the corner classification on the segment behind the new
    /// head. A fatal collision mutates nothing and returns
    /// [`MoveOutcome::Died`].
    pub fn advance(&mut self, grid: &mut Grid, turned: bool) -> MoveOutcome {
        let head = self.head();
        let next = head.step(self.direction);
        let target = grid.get(next.x, next.y);

        match target {
            Cell::Wall | Cell::Body(_) => return MoveOutcome::Died,
            Cell::Empty | Cell::Apple => {}
        }

        // New head first, then demote the former head behind it.
        grid.set(next.x, next.y, Cell::Body(shape::head_segment(self.direction)));
        self.body.push_back(next);

        if let Cell::Body(seg) = grid.get(head.x, head.y) {
            let demoted = if turned {
                shape::turn_corner(seg, self.direction)
            } else {
                shape::straighten(seg)
            };
            grid.set(head.x, head.y, Cell::Body(demoted));
        }

        match target {
            Cell::Apple => MoveOutcome::Ate,
            _ => {
                let old_tail = self.body.pop_front().expect("snake body is never empty");
                grid.set(old_tail.x, old_tail.y, Cell::Empty);

                let new_tail = self.tail();
                if let Cell::Body(seg) = grid.get(new_tail.x, new_tail.y) {
                    grid.set(new_tail.x, new_tail.y, Cell::Body(shape::tail_segment(seg)));
                }
                MoveOutcome::Advanced
            }
        }
    }
}
