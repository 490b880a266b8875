//! Game tick tests: input draining, gravity ordering and whole-level play

use tui_boulder::core::{DrainOrder, Game, Grid, MoveOutcome, Position};
use tui_boulder::types::{Direction, FallingState, GameAction, Tile, DEFAULT_LAYOUT};

fn default_game() -> Game {
    Game::new(Grid::from_codes(&DEFAULT_LAYOUT).unwrap())
}

fn corner_grid() -> Grid {
    Grid::from_codes(&[
        [2, 2, 2, 2],
        [2, 2, 0, 2],
        [2, 0, 3, 2],
        [2, 2, 2, 2],
    ])
    .unwrap()
}

#[test]
fn test_newest_input_applies_first() {
    let mut game = Game::new(corner_grid());
    game.enqueue(Direction::Left);
    game.enqueue(Direction::Up);

    let report = game.step();
    assert_eq!(
        report.moves.as_slice(),
        &[
            (Direction::Up, MoveOutcome::Moved),
            (Direction::Left, MoveOutcome::Blocked)
        ]
    );
    assert_eq!(game.grid().player(), Position::new(1, 2));
    assert!(game.inputs().is_empty());
}

#[test]
fn test_fifo_drain_applies_oldest_first() {
    let mut game = Game::with_drain_order(corner_grid(), DrainOrder::Fifo);
    game.enqueue(Direction::Left);
    game.enqueue(Direction::Up);

    let report = game.step();
    assert_eq!(
        report.moves.as_slice(),
        &[
            (Direction::Left, MoveOutcome::Moved),
            (Direction::Up, MoveOutcome::Blocked)
        ]
    );
    assert_eq!(game.grid().player(), Position::new(2, 1));
}

#[test]
fn test_moves_resolve_before_gravity() {
    // Digging out from under a stone lets it fall in the same step.
    let mut game = Game::new(
        Grid::from_codes(&[
            [2, 2, 2, 2],
            [2, 4, 2, 2],
            [2, 3, 0, 2],
            [2, 2, 2, 2],
        ])
        .unwrap(),
    );
    game.enqueue(Direction::Right);
    let report = game.step();
    assert_eq!(report.fall.dropped, 1);
    assert_eq!(
        game.grid().tile_at(Position::new(2, 1)),
        Tile::Stone(FallingState::Falling)
    );
}

#[test]
fn test_default_layout_walkthrough() {
    use Direction::*;

    let mut game = default_game();
    let plan = [Right, Right, Right, Down, Down, Down, Left, Left, Right, Up, Left, Left];
    for (i, dir) in plan.into_iter().enumerate() {
        game.enqueue(dir);
        let report = game.step();
        assert!(report.moves[0].1.moved(), "step {} ({dir:?})", i + 1);

        let grid = game.grid();
        match i + 1 {
            9 => assert_eq!(
                grid.tile_at(Position::new(4, 2)),
                Tile::Stone(FallingState::Falling)
            ),
            11 => assert_eq!(
                grid.tile_at(Position::new(3, 3)),
                Tile::Box(FallingState::Falling)
            ),
            12 => {
                assert_eq!(
                    report.moves[0].1,
                    MoveOutcome::Unlocked {
                        lock: Tile::Lock1,
                        cleared: 1
                    }
                );
                assert_eq!(
                    grid.tile_at(Position::new(4, 3)),
                    Tile::Box(FallingState::Falling)
                );
            }
            _ => {}
        }
    }

    let grid = game.grid();
    assert_eq!(grid.player(), Position::new(3, 1));
    assert_eq!(grid.count(Tile::Lock1), 0);
    assert_eq!(grid.tile_at(Position::new(4, 5)), Tile::Air);
    assert_eq!(game.tick(), 12);

    // Stepping off the key cell drops the stone that was resting on it.
    game.enqueue(Right);
    game.step();
    let grid = game.grid();
    assert_eq!(grid.player(), Position::new(3, 2));
    assert_eq!(
        grid.tile_at(Position::new(3, 1)),
        Tile::Stone(FallingState::Falling)
    );
    assert_eq!(
        grid.tile_at(Position::new(4, 3)),
        Tile::Box(FallingState::Resting)
    );

    let report = game.step();
    assert_eq!(report.fall.landed, 1);
    assert!(game.step().fall.is_settled());
}

#[test]
fn test_random_play_keeps_grid_invariants() {
    let mut game = default_game();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

    for _ in 0..2000 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let burst = (seed >> 60) as usize % 4;
        for k in 0..burst {
            let dir = Direction::ALL[((seed >> (8 * k + 8)) as usize) % 4];
            game.enqueue(dir);
        }
        game.step();

        let grid = game.grid();
        assert!(grid.border_intact());
        assert_eq!(grid.count(Tile::Player), 1);
        assert_eq!(grid.tile_at(grid.player()), Tile::Player);
    }
    assert_eq!(game.tick(), 2000);
}

#[test]
fn test_restart_and_pause_actions() {
    let mut game = default_game();
    assert!(game.apply_action(GameAction::Move(Direction::Right)));
    game.step();
    assert_eq!(game.grid().player(), Position::new(1, 2));

    assert!(game.apply_action(GameAction::Pause));
    game.enqueue(Direction::Right);
    let report = game.step();
    assert!(report.moves.is_empty());
    assert_eq!(game.tick(), 1);
    assert_eq!(game.grid().player(), Position::new(1, 2));

    assert!(game.apply_action(GameAction::Restart));
    assert!(!game.paused());
    assert_eq!(game.tick(), 0);
    assert_eq!(game.grid(), &Grid::from_codes(&DEFAULT_LAYOUT).unwrap());
}

#[test]
fn test_queue_overflow_drops_newest() {
    let mut game = default_game();
    let capacity = tui_boulder::types::INPUT_QUEUE_CAPACITY;
    for _ in 0..capacity {
        assert!(game.enqueue(Direction::Up));
    }
    assert!(!game.enqueue(Direction::Right));
    assert_eq!(game.inputs().len(), capacity);

    let report = game.step();
    assert_eq!(report.moves.len(), capacity);
    assert!(report.moves.iter().all(|&(d, o)| d == Direction::Up && o == MoveOutcome::Blocked));
}
