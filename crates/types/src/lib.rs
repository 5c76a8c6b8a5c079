//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing toward
//! the bottom of the screen when the camera sits at its home angle (0°).
//! "Up" therefore means `y - 1`.
//!
//! - **Default size**: 6 columns x 6 rows
//! - **Start cell**: (0, 0)
//! - **Targets**: exactly 6, valued 1..=6
//! - **Obstacles**: at most 5, relocated every 15..=20 accepted moves
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `DEFAULT_ROLL_STEP` | π/16 | Pivot angle added per tick (8 ticks per roll) |
//! | `CAMERA_STEP_DEG` | 90 | Camera orbit per rotate intent |
//!
//! # Examples
//!
//! ```
//! use tui_dicepath_types::{Direction, Intent, Pos};
//!
//! let p = Pos::new(2, 2);
//! assert_eq!(p.step(Direction::Right), Pos::new(3, 2));
//! assert_eq!(p.step(Direction::Up), Pos::new(2, 1));
//!
//! assert_eq!(Direction::Up.rotate_ccw(), Direction::Left);
//!
//! assert_eq!(Intent::Move(Direction::Left).as_str(), "moveLeft");
//! ```

use std::f32::consts::FRAC_PI_2;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u8 = 6;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u8 = 6;

/// Number of numbered target cells on every board
pub const TARGET_COUNT: usize = 6;

/// Upper bound on simultaneously placed obstacles
pub const MAX_OBSTACLES: usize = 5;

/// Lower bound (inclusive) of the accepted-move interval between obstacle relocations
pub const OBSTACLE_INTERVAL_MIN: u32 = 15;

/// Upper bound (inclusive) of the accepted-move interval between obstacle relocations
pub const OBSTACLE_INTERVAL_MAX: u32 = 20;

/// Opposite faces of the die always sum to this value
pub const FACE_SUM: u8 = 7;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A full roll is a quarter turn
pub const ROLL_ANGLE: f32 = FRAC_PI_2;

/// Pivot angle added per tick (a roll takes 8 ticks)
pub const DEFAULT_ROLL_STEP: f32 = FRAC_PI_2 / 8.0;

/// Camera orbit per rotate intent, in degrees
pub const CAMERA_STEP_DEG: f32 = 90.0;

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one cell away in `dir`.
    ///
    /// The result may lie outside any board; callers bounds-check it.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal roll directions, expressed on the board plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in table order (matches [`Direction::index`])
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector on the board grid
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Position in [`Direction::ALL`] (clockwise from Up)
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Quarter turn counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Intents emitted by an input adapter
///
/// Move directions are screen-relative; the controller remaps them through the
/// current camera orbit before they reach the die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Roll the die one cell (screen-relative)
    Move(Direction),
    /// Orbit the camera 90° to the left
    RotateCameraLeft,
    /// Orbit the camera 90° to the right
    RotateCameraRight,
    /// Begin a session (ignored by the host while one is active)
    Start,
    /// Regenerate the board and restart
    Reset,
}

impl Intent {
    /// Stable camelCase name, used in the session log
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dicepath_types::{Direction, Intent};
    ///
    /// assert_eq!(Intent::Move(Direction::Up).as_str(), "moveUp");
    /// assert_eq!(Intent::RotateCameraLeft.as_str(), "rotateCameraLeft");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Move(Direction::Up) => "moveUp",
            Intent::Move(Direction::Down) => "moveDown",
            Intent::Move(Direction::Left) => "moveLeft",
            Intent::Move(Direction::Right) => "moveRight",
            Intent::RotateCameraLeft => "rotateCameraLeft",
            Intent::RotateCameraRight => "rotateCameraRight",
            Intent::Start => "start",
            Intent::Reset => "reset",
        }
    }
}
