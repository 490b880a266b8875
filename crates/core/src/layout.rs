//! Layout validation - turns rows of tile codes into a checked grid
//!
//! Movement and gravity probe up to two cells past the acting tile, so every
//! layout must be rectangular, fully enclosed by `Unbreakable` tiles and contain
//! exactly one player. Violations are reported here, before the first tick.

use std::fmt;

use crate::grid::Position;
use crate::types::{Tile, MIN_GRID_SIDE};

/// Why a layout was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows, or rows with no columns
    Empty,
    /// Smaller than the 3x3 needed for a walled-in player
    TooSmall { width: usize, height: usize },
    /// A row whose length differs from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A code outside 0..=11
    UnknownCode { row: usize, col: usize, code: u8 },
    /// A border cell that is not `Unbreakable`
    OpenBorder { row: usize, col: usize, found: Tile },
    MissingPlayer,
    MultiplePlayers { first: Position, second: Position },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout is empty"),
            LayoutError::TooSmall { width, height } => write!(
                f,
                "layout is {width}x{height}, minimum is {MIN_GRID_SIDE}x{MIN_GRID_SIDE}"
            ),
            LayoutError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, expected {expected}"
            ),
            LayoutError::UnknownCode { row, col, code } => {
                write!(f, "unknown tile code {code} at ({row}, {col})")
            }
            LayoutError::OpenBorder { row, col, found } => write!(
                f,
                "border cell ({row}, {col}) is {}, must be unbreakable",
                found.kind().as_str()
            ),
            LayoutError::MissingPlayer => write!(f, "layout has no player tile"),
            LayoutError::MultiplePlayers { first, second } => write!(
                f,
                "layout has more than one player: ({}, {}) and ({}, {})",
                first.row, first.col, second.row, second.col
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A decoded, validated layout: row-major tiles plus the player cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Tile>,
    pub player: Position,
}

/// Decode and validate rows of tile codes.
pub(crate) fn decode<R: AsRef<[u8]>>(rows: &[R]) -> Result<Decoded, LayoutError> {
    let height = rows.len();
    let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(LayoutError::Empty);
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut player: Option<Position> = None;

    for (row, codes) in rows.iter().enumerate() {
        let codes = codes.as_ref();
        if codes.len() != width {
            return Err(LayoutError::Ragged {
                row,
                expected: width,
                found: codes.len(),
            });
        }
        for (col, &code) in codes.iter().enumerate() {
            let tile = Tile::from_code(code).ok_or(LayoutError::UnknownCode { row, col, code })?;
            if tile.is_player() {
                let here = Position::new(row, col);
                if let Some(first) = player {
                    return Err(LayoutError::MultiplePlayers {
                        first,
                        second: here,
                    });
                }
                player = Some(here);
            }
            cells.push(tile);
        }
    }

    if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
        return Err(LayoutError::TooSmall { width, height });
    }

    for row in 0..height {
        for col in 0..width {
            let on_border = row == 0 || col == 0 || row == height - 1 || col == width - 1;
            let found = cells[row * width + col];
            if on_border && found != Tile::Unbreakable {
                return Err(LayoutError::OpenBorder { row, col, found });
            }
        }
    }

    let player = player.ok_or(LayoutError::MissingPlayer)?;

    Ok(Decoded {
        width,
        height,
        cells,
        player,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_LAYOUT;

    #[test]
    fn default_layout_decodes() {
        let decoded = decode(&DEFAULT_LAYOUT).unwrap();
        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 6);
        assert_eq!(decoded.player, Position::new(1, 1));
        assert_eq!(decoded.cells.len(), 48);
    }

    #[test]
    fn border_is_checked_after_codes() {
        // The stray 12 is reported before the open border on row 0.
        let rows = [vec![0, 2, 2], vec![2, 12, 2], vec![2, 2, 2]];
        assert_eq!(
            decode(&rows),
            Err(LayoutError::UnknownCode {
                row: 1,
                col: 1,
                code: 12
            })
        );
    }

    #[test]
    fn display_names_the_offending_tile() {
        let err = LayoutError::OpenBorder {
            row: 0,
            col: 3,
            found: Tile::Flux,
        };
        assert_eq!(
            err.to_string(),
            "border cell (0, 3) is flux, must be unbreakable"
        );
    }
}
