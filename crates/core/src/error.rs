//! Configuration errors.
//!
//! Invalid moves are not errors: they are rejected with a `false` return. The
//! only failures the core reports are geometry and tuning mistakes, caught
//! before a session can begin.

use thiserror::Error;

use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyBoard { width: u8, height: u8 },

    #[error("board dimensions must not exceed {max} (got {width}x{height})")]
    BoardTooLarge { width: u8, height: u8, max: u8 },

    #[error("a {width}x{height} board leaves {available} free cells, {required} targets need placing")]
    BoardTooSmall {
        width: u8,
        height: u8,
        available: usize,
        required: usize,
    },

    #[error("start cell {start} lies outside the {width}x{height} board")]
    StartOutOfBounds { start: Pos, width: u8, height: u8 },

    #[error("obstacle count {count} exceeds the maximum of {max}")]
    TooManyObstacles { count: usize, max: usize },

    #[error("obstacle interval {min}..={max} is empty or starts at zero")]
    InvalidObstacleInterval { min: u32, max: u32 },

    #[error("roll step must be a positive finite angle (got {0})")]
    InvalidRollStep(f32),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
