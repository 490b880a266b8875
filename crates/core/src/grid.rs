//! Grid module - the tile container and the cached player position
//!
//! Tiles are stored in a flat row-major vector (`row * width + col`).
//! Coordinates: `row` grows downwards, `col` grows to the right.
//!
//! The grid is the only owner of tile mutation. Outside this crate it is
//! read-only; the movement resolver and the fall pass mutate it through the
//! crate-private setters below, which keep the player cache in sync.

use crate::layout::{self, LayoutError};
use crate::types::Tile;

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `(dr, dc)`. Returns `None` on underflow.
    pub fn offset(self, (dr, dc): (isize, isize), steps: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        Some(Self { row, col })
    }

    pub fn below(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }
}

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
    player: Position,
}

impl Grid {
    /// Build a grid from rows of tile codes.
    ///
    /// The layout must be rectangular, walled in by `Unbreakable` tiles and
    /// contain exactly one player.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LayoutError> {
        let decoded = layout::decode(rows)?;
        log::debug!(
            "loaded {}x{} layout, player at ({}, {})",
            decoded.width,
            decoded.height,
            decoded.player.row,
            decoded.player.col
        );
        Ok(Self {
            width: decoded.width,
            height: decoded.height,
            cells: decoded.cells,
            player: decoded.player,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cached player position
    pub fn player(&self) -> Position {
        self.player
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(pos.row * self.width + pos.col)
    }

    /// Tile at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Tile at `pos`, treating anything outside the grid as a wall
    #[inline]
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.get(pos).unwrap_or(Tile::Unbreakable)
    }

    /// Like [`Grid::tile_at`] for a position that may have underflowed
    #[inline]
    pub(crate) fn probe(&self, pos: Option<Position>) -> Tile {
        pos.map(|p| self.tile_at(p)).unwrap_or(Tile::Unbreakable)
    }

    /// Overwrite a non-player cell. Writing `Tile::Player` is refused; players
    /// only move through [`Grid::relocate_player`].
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) -> bool {
        if tile.is_player() || pos == self.player {
            return false;
        }
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Move the player to `dest`: origin becomes Air, `dest` becomes Player
    /// and the cached position follows.
    pub(crate) fn relocate_player(&mut self, dest: Position) -> bool {
        let (Some(from), Some(to)) = (self.index(self.player), self.index(dest)) else {
            return false;
        };
        if from == to {
            return false;
        }
        self.cells[from] = Tile::Air;
        self.cells[to] = Tile::Player;
        self.player = dest;
        true
    }

    /// Replace every `target` tile with `with`. Returns how many were replaced.
    pub(crate) fn replace_all(&mut self, target: Tile, with: Tile) -> usize {
        if target.is_player() || with.is_player() {
            return 0;
        }
        let mut replaced = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == target) {
            *cell = with;
            replaced += 1;
        }
        replaced
    }

    /// Visit every cell in row-major order (top to bottom, left to right)
    pub fn for_each_cell(&self, mut f: impl FnMut(Position, Tile)) {
        for (idx, &tile) in self.cells.iter().enumerate() {
            f(Position::new(idx / self.width, idx % self.width), tile);
        }
    }

    /// Number of cells holding exactly `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    /// Export in the layout code format
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(Tile::code).collect())
            .collect()
    }

    /// True when the outer ring is entirely `Unbreakable`
    pub fn border_intact(&self) -> bool {
        (0..self.height).all(|row| {
            (0..self.width).all(|col| {
                let on_border =
                    row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1;
                !on_border || self.cells[row * self.width + col] == Tile::Unbreakable
            })
        })
    }
}
