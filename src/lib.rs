//! TUI Boulder (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_boulder::{core,input,term,types}`
//! and hosts the runtime [`config`] shared by the binary.

pub mod config;

pub use tui_boulder_core as core;
pub use tui_boulder_input as input;
pub use tui_boulder_term as term;
pub use tui_boulder_types as types;
