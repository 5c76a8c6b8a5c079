//! Terminal rendering for the dice path puzzle.
//!
//! Renders a [`core::GameSnapshot`] into a character framebuffer and flushes
//! it to the terminal with crossterm, re-encoding only cells that changed.
//! The board is drawn top-down and re-projected for each camera quarter turn.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dicepath_core as core;
pub use tui_dicepath_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ScreenGrid, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
