//! Camera-relative direction remapping.
//!
//! The camera orbits the board in 90° steps. A screen-space "up" must roll
//! the die away from the viewer whatever the orbit, so every move intent is
//! translated through one of four fixed tables before it reaches the die.

use crate::types::{Direction, CAMERA_STEP_DEG};

/// `REMAP[quarter][dir.index()]`, with directions in `Direction::ALL` order
/// (Up, Right, Down, Left).
const REMAP: [[Direction; 4]; 4] = [
    // 0°: identity
    [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ],
    // 90°: up→right, right→down, down→left, left→up
    [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ],
    // 180°: full reversal
    [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ],
    // 270°: inverse of the 90° table
    [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ],
];

/// Snap an orbit angle (degrees, any sign) to its quarter-turn index 0..=3.
///
/// Angles round to the nearest quarter, with exact halfway points (45°,
/// 135°, ...) rounding up.
pub fn quarter_turns(angle_degrees: f32) -> usize {
    let q = ((angle_degrees + 45.0) / 90.0).floor() as i64;
    q.rem_euclid(4) as usize
}

/// Translate a screen-relative direction into a board direction.
///
/// # Examples
///
/// ```
/// use tui_dicepath_core::camera::remap_by_camera;
/// use tui_dicepath_core::types::Direction;
///
/// assert_eq!(remap_by_camera(Direction::Up, 0.0), Direction::Up);
/// assert_eq!(remap_by_camera(Direction::Up, 90.0), Direction::Right);
/// assert_eq!(remap_by_camera(Direction::Up, 180.0), Direction::Down);
/// assert_eq!(remap_by_camera(Direction::Up, -90.0), Direction::Left);
/// ```
pub fn remap_by_camera(dir: Direction, angle_degrees: f32) -> Direction {
    REMAP[quarter_turns(angle_degrees)][dir.index()]
}

/// Orbit `angle_degrees` by `quarters` steps and normalise into `[0, 360)`.
pub fn orbit(angle_degrees: f32, quarters: i32) -> f32 {
    (angle_degrees + quarters as f32 * CAMERA_STEP_DEG).rem_euclid(360.0)
}
