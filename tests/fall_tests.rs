//! Gravity pass tests

use tui_boulder::core::{fall_tick, Grid, Position};
use tui_boulder::types::{FallingState, Tile};

const FALLING_STONE: Tile = Tile::Stone(FallingState::Falling);
const RESTING_STONE: Tile = Tile::Stone(FallingState::Resting);
const FALLING_BOX: Tile = Tile::Box(FallingState::Falling);
const RESTING_BOX: Tile = Tile::Box(FallingState::Resting);

#[test]
fn test_supported_stone_never_changes() {
    let mut g = Grid::from_codes(&[
        [2, 2, 2, 2],
        [2, 3, 4, 2],
        [2, 1, 6, 2],
        [2, 2, 2, 2],
    ])
    .unwrap();
    let before = g.clone();
    for _ in 0..50 {
        assert!(fall_tick(&mut g).is_settled());
    }
    assert_eq!(g, before);
}

#[test]
fn test_stone_drops_one_row_per_pass_then_lands() {
    let mut g = Grid::from_codes(&[
        [2, 2, 2],
        [2, 4, 2],
        [2, 0, 2],
        [2, 0, 2],
        [2, 3, 2],
        [2, 2, 2],
    ])
    .unwrap();

    let report = fall_tick(&mut g);
    assert_eq!(report.dropped, 1);
    assert_eq!(g.tile_at(Position::new(2, 1)), FALLING_STONE);
    assert_eq!(g.tile_at(Position::new(1, 1)), Tile::Air);

    fall_tick(&mut g);
    assert_eq!(g.tile_at(Position::new(3, 1)), FALLING_STONE);

    // Resting on the player now; the falling flag clears.
    let report = fall_tick(&mut g);
    assert_eq!((report.dropped, report.landed), (0, 1));
    assert_eq!(g.tile_at(Position::new(3, 1)), RESTING_STONE);
    assert_eq!(g.tile_at(Position::new(4, 1)), Tile::Player);

    assert!(fall_tick(&mut g).is_settled());
}

#[test]
fn test_column_of_boxes_moves_together() {
    // Bottom-up order means every box sees the gap left by the one below it.
    let mut g = Grid::from_codes(&[
        [2, 2, 2, 2],
        [2, 6, 3, 2],
        [2, 6, 1, 2],
        [2, 6, 1, 2],
        [2, 0, 1, 2],
        [2, 2, 2, 2],
    ])
    .unwrap();

    let report = fall_tick(&mut g);
    assert_eq!(report.dropped, 3);
    assert_eq!(g.tile_at(Position::new(1, 1)), Tile::Air);
    for row in 2..=4 {
        assert_eq!(g.tile_at(Position::new(row, 1)), FALLING_BOX, "row {row}");
    }

    let report = fall_tick(&mut g);
    assert_eq!((report.dropped, report.landed), (0, 3));
    for row in 2..=4 {
        assert_eq!(g.tile_at(Position::new(row, 1)), RESTING_BOX, "row {row}");
    }
}

#[test]
fn test_falling_stone_lands_on_any_non_air() {
    for below in [1u8, 4, 6, 8, 9, 11] {
        let mut g = Grid::from_codes(&[
            [2, 2, 2, 2],
            [2, 5, 3, 2],
            [2, below, 1, 2],
            [2, 2, 2, 2],
        ])
        .unwrap();
        let report = fall_tick(&mut g);
        assert_eq!(report.landed, 1, "below code {below}");
        assert_eq!(g.tile_at(Position::new(1, 1)), RESTING_STONE);
    }
}

#[test]
fn test_flux_keys_and_locks_ignore_gravity() {
    let mut g = Grid::from_codes(&[
        [2, 2, 2, 2, 2, 2],
        [2, 1, 8, 9, 3, 2],
        [2, 0, 0, 0, 0, 2],
        [2, 2, 2, 2, 2, 2],
    ])
    .unwrap();
    let before = g.clone();
    assert!(fall_tick(&mut g).is_settled());
    assert_eq!(g, before);
}
