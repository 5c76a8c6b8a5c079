//! TUI dice path (workspace facade crate).
//!
//! Re-exports `tui_dicepath::{core,input,term,types}` from the crates under
//! `crates/`, plus the host-side pieces used by the terminal binary.

pub mod cli;
pub mod host;
pub mod session_log;

pub use tui_dicepath_core as core;
pub use tui_dicepath_input as input;
pub use tui_dicepath_term as term;
pub use tui_dicepath_types as types;
