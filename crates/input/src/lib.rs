//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Each key press
//! becomes exactly one queued action; terminal auto-repeat and key release
//! events are ignored.

pub mod map;

pub use tui_boulder_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
