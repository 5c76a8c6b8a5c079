//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]. Moves arriving
//! while the die is rolling are rejected by the controller, not here.

pub mod map;

pub use tui_dicepath_types as types;

pub use map::{handle_key_event, should_quit};
