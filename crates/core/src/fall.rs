//! Gravity pass - one bottom-up sweep over the grid per tick
//!
//! Rows are visited from the bottom to the top and, within a row, from left to
//! right. A tile that drops lands in a row that was already visited, so it is
//! never moved twice in the same pass.

use crate::grid::{Grid, Position};
use crate::tile::{fall_effect, FallEffect};
use crate::types::Tile;

/// Counts of the transitions a single pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FallReport {
    /// Tiles that moved down one row
    pub dropped: u32,
    /// Falling tiles that settled in place
    pub landed: u32,
}

impl FallReport {
    /// Nothing moved and nothing changed state
    pub fn is_settled(&self) -> bool {
        self.dropped == 0 && self.landed == 0
    }
}

/// Run one gravity pass.
pub fn fall_tick(grid: &mut Grid) -> FallReport {
    let mut report = FallReport::default();

    for row in (0..grid.height()).rev() {
        for col in 0..grid.width() {
            let pos = Position::new(row, col);
            let tile = grid.tile_at(pos);
            if !tile.is_stony() {
                continue;
            }
            let below = pos.below();
            match fall_effect(tile, grid.tile_at(below)) {
                FallEffect::Drop(falling) => {
                    grid.set(below, falling);
                    grid.set(pos, Tile::Air);
                    report.dropped += 1;
                }
                FallEffect::Land(resting) => {
                    grid.set(pos, resting);
                    report.landed += 1;
                }
                FallEffect::Inert => {}
            }
        }
    }

    report
}
