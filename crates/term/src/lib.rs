//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Read the grid only through `Grid::for_each_cell` and `Grid::player`
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_boulder_core as core;
pub use tui_boulder_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_glyph, AnchorY, GameView, Viewport, PLAYER_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
