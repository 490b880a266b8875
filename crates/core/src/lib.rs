//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains every rule of the puzzle: the tile behavior tables, the
//! grid and its invariants, movement resolution and the gravity pass.
//! It has **zero dependencies** on terminal, input, or I/O code.
//!
//! # Module Structure
//!
//! - [`grid`]: bordered 2D tile container with the cached player position
//! - [`layout`]: decoding and validation of tile-code layouts
//! - [`tile`]: per-kind responses to player moves and to gravity
//! - [`movement`]: resolves one direction into grid mutations
//! - [`fall`]: the bottom-up gravity sweep
//! - [`game`]: input queue plus the per-frame step
//!
//! # Rules
//!
//! - **Dig**: the player walks into Air and Flux, leaving Air behind
//! - **Push**: a resting Stone/Box is pushed sideways one cell when the cell
//!   beyond is Air and the tile is supported from below
//! - **Gravity**: Stones and Boxes fall one row per tick into Air, then rest
//!   one tick after landing
//! - **Keys**: stepping onto a key removes every lock of its color
//!
//! # Example
//!
//! ```
//! use tui_boulder_core::{Game, Grid, Position};
//! use tui_boulder_types::{Direction, Tile, DEFAULT_LAYOUT};
//!
//! let grid = Grid::from_codes(&DEFAULT_LAYOUT).unwrap();
//! let mut game = Game::new(grid);
//!
//! game.enqueue(Direction::Right);
//! game.step();
//!
//! assert_eq!(game.grid().player(), Position::new(1, 2));
//! assert_eq!(game.grid().count(Tile::Player), 1);
//! ```

pub mod fall;
pub mod game;
pub mod grid;
pub mod layout;
pub mod movement;
pub mod tile;

pub use tui_boulder_types as types;

// Re-export commonly used types for convenience
pub use fall::{fall_tick, FallReport};
pub use game::{DrainOrder, Game, InputQueue, StepReport};
pub use grid::{Grid, Position};
pub use layout::LayoutError;
pub use movement::{attempt_move, move_horizontal, move_vertical, MoveOutcome};
pub use tile::{fall_effect, move_effect, FallEffect, MoveEffect};
