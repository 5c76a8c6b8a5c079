//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Can run under any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: grid, target/obstacle placement and highlight state
//! - [`die`]: roll state machine and face-value permutations
//! - [`camera`]: screen-to-board direction remapping
//! - [`game`]: session controller, move validation and win detection
//! - [`rng`]: seeded LCG with Fisher-Yates shuffle
//! - [`snapshot`]: per-frame read-only view for renderers
//! - [`config`]: tunables and their validation
//!
//! # Game Rules
//!
//! - The die starts on the start cell with 6 facing down.
//! - Each move rolls it a quarter turn onto a neighbouring cell, changing
//!   which face touches the board.
//! - Six targets numbered 1..=6 must be landed on in order, with the bottom
//!   face showing the target's number.
//! - Up to five obstacles block movement and relocate every 15..=20 accepted moves.
//!
//! # Example
//!
//! ```
//! use tui_dicepath_core::{GameConfig, GameController};
//! use tui_dicepath_core::types::{Direction, Pos};
//!
//! let config = GameConfig::default()
//!     .with_seed(12345)
//!     .with_start(Pos::new(2, 2))
//!     .with_obstacle_count(0);
//! let mut game = GameController::new(config).unwrap();
//! game.start();
//!
//! assert!(game.move_cube(Direction::Right));
//! assert!(!game.move_cube(Direction::Right)); // still rolling
//! while !game.tick() {}
//!
//! assert_eq!(game.die().position(), Pos::new(3, 2));
//! assert_eq!(game.die().bottom_value(), 3);
//! ```
//!
//! # Timing
//!
//! Call [`GameController::tick`](game::GameController::tick) once per frame.
//! Each tick turns an in-flight roll by the configured step (π/16 by default),
//! so a roll lands on its eighth tick.

pub mod board;
pub mod camera;
pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tui_dicepath_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellRole, Highlight};
pub use camera::remap_by_camera;
pub use config::GameConfig;
pub use die::{Die, DieState, FaceValues, Roll};
pub use error::ConfigError;
pub use game::{GameController, GameEvent, SessionPhase};
pub use rng::SimpleRng;
pub use snapshot::{DieSnapshot, GameSnapshot};
