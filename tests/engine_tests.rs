//! End-to-end engine scenarios driven through the session API.

use tui_snake::core::{GameConfig, GameSession, MoveOutcome};
use tui_snake::types::{Cell, Direction, PieceKind, Point};

/// Park the apple at a known cell so a scenario is deterministic.
fn relocate_apple(session: &mut GameSession, to: Point) {
    let apple = session.apple().expect("session always has an apple");
    let grid = session.grid_mut();
    grid.set(apple.x, apple.y, Cell::Empty);
    assert!(grid.get(to.x, to.y).is_empty(), "target cell must be empty");
    grid.set(to.x, to.y, Cell::Apple);
}

fn apple_positions(session: &GameSession) -> Vec<Point> {
    session
        .grid()
        .iter()
        .filter(|(_, c)| matches!(c, Cell::Apple))
        .map(|(p, _)| p)
        .collect()
}

#[test]
fn test_eat_apple_scenario() {
    // 20x20 grid, length 3 starting at (4, 2) facing Right, apple forced
    // at (10, 2). Six moves later the head reaches the apple.
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    relocate_apple(&mut session, Point::new(10, 2));

    for expected_x in 5..10 {
        let outcome = session.tick().unwrap();
        assert_eq!(outcome, MoveOutcome::Advanced);
        assert_eq!(session.snake().head(), Point::new(expected_x, 2));
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.score(), 3);
    }

    let outcome = session.tick().unwrap();
    assert_eq!(outcome, MoveOutcome::Ate);
    assert_eq!(session.snake().head(), Point::new(10, 2));
    assert_eq!(session.score(), 4);
    assert_eq!(session.snake().len(), 4);

    // A fresh apple spawned somewhere else (the eaten cell now holds the
    // head, so it cannot be re-chosen).
    let apples = apple_positions(&session);
    assert_eq!(apples.len(), 1);
    assert_ne!(apples[0], Point::new(10, 2));
}

#[test]
fn test_wall_collision_scenario() {
    // Moving Right from (4, 2), the snake dies when the next cell is the
    // right wall at x = 19.
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    relocate_apple(&mut session, Point::new(1, 9));

    let mut outcomes = Vec::new();
    for _ in 0..40 {
        let outcome = session.tick().unwrap();
        outcomes.push(outcome);
        if outcome == MoveOutcome::Died {
            break;
        }
    }

    // 14 advances take the head from x=4 to x=18; the 15th move is fatal.
    assert_eq!(outcomes.len(), 15);
    assert!(outcomes[..14]
        .iter()
        .all(|o| *o == MoveOutcome::Advanced));
    assert_eq!(outcomes[14], MoveOutcome::Died);

    assert!(session.game_over());
    assert_eq!(session.score(), 3, "death does not change the score");
    assert_eq!(session.snake().head(), Point::new(18, 2));
}

#[test]
fn test_terminal_state_freezes_everything() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    relocate_apple(&mut session, Point::new(1, 9));

    while !session.game_over() {
        session.tick().unwrap();
    }

    let frozen = session.snapshot();
    for _ in 0..10 {
        assert_eq!(session.tick().unwrap(), MoveOutcome::Died);
    }
    assert!(!session.request_turn(Direction::Up));
    assert_eq!(
        session.snapshot(),
        frozen,
        "no grid or score mutation after game over"
    );
}

#[test]
fn test_growth_only_on_apples_over_a_long_drive() {
    // Steer a closed rectangle loop and count eats; length must track
    // them 1:1.
    let mut session = GameSession::new(GameConfig::default()).unwrap();

    let plan = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];
    let mut plan_idx = 0;
    let mut eaten = 0u32;

    for step in 0..200 {
        // Turn every 3 ticks: a 4x4 loop through (4,2)-(4,5)-(1,5)-(1,2),
        // entirely in open interior space.
        if step % 3 == 0 {
            assert!(session.request_turn(plan[plan_idx % plan.len()]));
            plan_idx += 1;
        }
        match session.tick().unwrap() {
            MoveOutcome::Ate => eaten += 1,
            MoveOutcome::Advanced => {}
            MoveOutcome::Died => break,
        }

        assert_eq!(session.snake().len() as u32, 3 + eaten);
        assert_eq!(session.score(), 3 + eaten);
        assert_eq!(apple_positions(&session).len(), 1);
        assert_simple_path(&session);
    }
}

#[test]
fn test_turn_corner_classification_through_session() {
    // Right -> Up turn: the corner segment lands at 180 degrees
    // (delta = (0 - 270 + 360) % 360 = 90, so 270 - 90).
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    relocate_apple(&mut session, Point::new(1, 9));

    assert!(session.request_turn(Direction::Up));
    session.tick().unwrap();

    let corner_pos = Point::new(4, 2); // the pre-turn head position
    let cell = session.grid().get(corner_pos.x, corner_pos.y);
    let seg = cell.segment().expect("corner must still be a body cell");
    assert_eq!(seg.piece, PieceKind::Turn);
    assert_eq!(seg.orientation, 180);
    assert_eq!(seg.previous_direction, Direction::Right);
    assert_eq!(seg.direction, Direction::Up);
}

fn assert_simple_path(session: &GameSession) {
    let points: Vec<Point> = session.snake().segments().collect();
    for pair in points.windows(2) {
        assert_eq!(
            pair[0].manhattan(pair[1]),
            1,
            "adjacent chain entries must touch orthogonally"
        );
    }
    for (i, a) in points.iter().enumerate() {
        for b in points.iter().skip(i + 1) {
            assert_ne!(a, b, "the chain must never self-intersect");
        }
    }
}
