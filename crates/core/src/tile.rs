//! Tile behavior - what each tile kind does when the player walks into it and
//! when the gravity pass reaches it.
//!
//! Every rule is an exhaustive match over [`Tile`], so adding a tile kind is a
//! compile error until its behavior is decided here.

use crate::types::{Axis, FallingState, Tile};

/// Response of a destination tile to a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// The player steps into the cell
    Enter,
    /// The tile may be pushed one cell further, subject to the push checks
    Push,
    /// Every tile of the given lock kind is cleared, then the player steps in
    Unlock(Tile),
    /// Nothing happens
    Blocked,
}

/// Response of a tile to one gravity pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallEffect {
    /// Move down one row, arriving as the given falling tile
    Drop(Tile),
    /// Stay in place, settling into the given resting tile
    Land(Tile),
    /// No change
    Inert,
}

/// Effect of moving the player into `tile` along `axis`.
pub fn move_effect(tile: Tile, axis: Axis) -> MoveEffect {
    match tile {
        Tile::Air | Tile::Flux => MoveEffect::Enter,
        Tile::Unbreakable | Tile::Player | Tile::Lock1 | Tile::Lock2 => MoveEffect::Blocked,
        Tile::Stone(_) | Tile::Box(_) => match axis {
            Axis::Horizontal if tile.is_pushable() => MoveEffect::Push,
            Axis::Horizontal | Axis::Vertical => MoveEffect::Blocked,
        },
        Tile::Key1 | Tile::Key2 => tile.opens().map_or(MoveEffect::Blocked, MoveEffect::Unlock),
    }
}

/// Effect of a gravity pass on `tile`, given the tile directly below it.
pub fn fall_effect(tile: Tile, below: Tile) -> FallEffect {
    match tile {
        Tile::Stone(state) | Tile::Box(state) => {
            if below.is_air() {
                FallEffect::Drop(tile.with_falling_state(FallingState::Falling))
            } else if state == FallingState::Falling {
                FallEffect::Land(tile.with_falling_state(FallingState::Resting))
            } else {
                FallEffect::Inert
            }
        }
        Tile::Air
        | Tile::Flux
        | Tile::Unbreakable
        | Tile::Player
        | Tile::Key1
        | Tile::Lock1
        | Tile::Key2
        | Tile::Lock2 => FallEffect::Inert,
    }
}
