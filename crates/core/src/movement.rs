//! Movement resolution - applies one directional intent to the grid
//!
//! Resolution order for a destination tile, first match wins:
//!
//! 1. Air or Flux: the player steps in
//! 2. Resting Stone/Box (horizontal only): pushed one cell if the cell beyond
//!    is Air and the tile is supported from below
//! 3. Key: every matching lock is cleared, then the player steps in
//! 4. Anything else: no-op
//!
//! Blocked moves are not errors and are not logged.

use crate::grid::{Grid, Position};
use crate::tile::{move_effect, MoveEffect};
use crate::types::{Direction, Tile};

/// What a move did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped into Air or Flux
    Moved,
    /// A stone or box slid one cell and the player followed
    Pushed,
    /// A key was picked up and `cleared` locks of kind `lock` turned to Air
    Unlocked { lock: Tile, cleared: usize },
    /// Nothing changed
    Blocked,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// Apply one player move. Never fails; a blocked move leaves the grid untouched.
pub fn attempt_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let delta = direction.delta();
    let origin = grid.player();
    let Some(dest) = origin.offset(delta, 1) else {
        return MoveOutcome::Blocked;
    };
    let target = grid.tile_at(dest);

    match move_effect(target, direction.axis()) {
        MoveEffect::Enter => {
            grid.relocate_player(dest);
            MoveOutcome::Moved
        }
        MoveEffect::Push => push(grid, target, origin, dest, delta),
        MoveEffect::Unlock(lock) => {
            let cleared = grid.replace_all(lock, Tile::Air);
            log::debug!("picked up key, cleared {} {}", cleared, lock.kind().as_str());
            grid.relocate_player(dest);
            MoveOutcome::Unlocked { lock, cleared }
        }
        MoveEffect::Blocked => MoveOutcome::Blocked,
    }
}

/// Horizontal move by `dx` (negative is left)
pub fn move_horizontal(grid: &mut Grid, dx: isize) -> MoveOutcome {
    match dx.signum() {
        -1 => attempt_move(grid, Direction::Left),
        1 => attempt_move(grid, Direction::Right),
        _ => MoveOutcome::Blocked,
    }
}

/// Vertical move by `dy` (negative is up)
pub fn move_vertical(grid: &mut Grid, dy: isize) -> MoveOutcome {
    match dy.signum() {
        -1 => attempt_move(grid, Direction::Up),
        1 => attempt_move(grid, Direction::Down),
        _ => MoveOutcome::Blocked,
    }
}

fn push(
    grid: &mut Grid,
    pushed: Tile,
    origin: Position,
    dest: Position,
    delta: (isize, isize),
) -> MoveOutcome {
    let beyond = origin.offset(delta, 2);
    let supported = !grid.tile_at(dest.below()).is_air();
    if !grid.probe(beyond).is_air() || !supported {
        return MoveOutcome::Blocked;
    }
    let Some(beyond) = beyond else {
        return MoveOutcome::Blocked;
    };

    // The tile keeps its state (always Resting here) as it slides.
    grid.set(beyond, pushed);
    grid.relocate_player(dest);
    MoveOutcome::Pushed
}
