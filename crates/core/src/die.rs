//! Die module - the rolling game piece
//!
//! The die tracks a grid position and which value sits on each of its six
//! faces. A roll is a quarter-turn pivot about the bottom edge facing the roll
//! direction, advanced a fixed angle per tick:
//!
//! ```text
//! Idle --roll(dir) [in bounds, not obstacle]--> Rolling { dir, from, to, angle }
//! Rolling --advance() [angle reaches π/2]--> Idle (position = to, faces permuted)
//! ```
//!
//! The direction travels with the Rolling state; completion never re-derives it.
//!
//! Face naming is board-relative: `front` points "up" the board (`y - 1`),
//! `right` points toward `x + 1`. Opposite faces always sum to 7.

use crate::board::Board;
use crate::types::{Direction, Pos, FACE_SUM, ROLL_ANGLE};

/// Value on each face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceValues {
    pub top: u8,
    pub bottom: u8,
    pub left: u8,
    pub right: u8,
    pub front: u8,
    pub back: u8,
}

impl FaceValues {
    /// Orientation every session starts from
    pub const CANONICAL: FaceValues = FaceValues {
        top: 1,
        bottom: 6,
        front: 2,
        back: 5,
        right: 3,
        left: 4,
    };

    /// Opposite faces sum to 7 and all six values are distinct.
    pub fn is_valid(&self) -> bool {
        let sums_ok = self.top + self.bottom == FACE_SUM
            && self.left + self.right == FACE_SUM
            && self.front + self.back == FACE_SUM;
        let mut seen = [false; 7];
        for v in [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.front,
            self.back,
        ] {
            if !(1..=6).contains(&v) || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        sums_ok
    }

    /// Orientation after one completed roll in `dir`.
    pub fn rolled(self, dir: Direction) -> Self {
        match dir {
            Direction::Up => self.roll_up(),
            Direction::Down => self.roll_down(),
            Direction::Left => self.roll_left(),
            Direction::Right => self.roll_right(),
        }
    }

    // Top tips forward onto the front; left/right unchanged.
    fn roll_up(self) -> Self {
        Self {
            top: self.back,
            front: self.top,
            bottom: self.front,
            back: self.bottom,
            ..self
        }
    }

    fn roll_down(self) -> Self {
        Self {
            top: self.front,
            back: self.top,
            bottom: self.back,
            front: self.bottom,
            ..self
        }
    }

    // Top tips over onto the right; front/back unchanged.
    fn roll_right(self) -> Self {
        Self {
            top: self.left,
            right: self.top,
            bottom: self.right,
            left: self.bottom,
            ..self
        }
    }

    fn roll_left(self) -> Self {
        Self {
            top: self.right,
            left: self.top,
            bottom: self.left,
            right: self.bottom,
            ..self
        }
    }
}

impl Default for FaceValues {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Rounding slack when summing per-tick steps up to a quarter turn
const LANDING_EPSILON: f32 = 1e-4;

/// A roll in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roll {
    pub direction: Direction,
    pub from: Pos,
    pub to: Pos,
    /// Pivot angle so far, in radians, within `0..=π/2`
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DieState {
    #[default]
    Idle,
    Rolling(Roll),
}

/// The rolling die
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    position: Pos,
    faces: FaceValues,
    state: DieState,
}

impl Die {
    pub fn new(start: Pos) -> Self {
        Self {
            position: start,
            faces: FaceValues::CANONICAL,
            state: DieState::Idle,
        }
    }

    /// Committed position (the origin cell while a roll is in flight)
    pub fn position(&self) -> Pos {
        self.position
    }

    /// Committed orientation (unchanged until a roll completes)
    pub fn faces(&self) -> FaceValues {
        self.faces
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.state, DieState::Rolling(_))
    }

    pub fn current_roll(&self) -> Option<Roll> {
        match self.state {
            DieState::Rolling(roll) => Some(roll),
            DieState::Idle => None,
        }
    }

    /// Pivot angle of the roll in flight (0 when idle)
    pub fn roll_angle(&self) -> f32 {
        self.current_roll().map(|r| r.angle).unwrap_or(0.0)
    }

    /// The face touching the board
    pub fn bottom_value(&self) -> u8 {
        self.faces.bottom
    }

    /// Board-plane edge the die pivots about while rolling: the bottom edge
    /// on the side it is rolling toward. Returned as the two corner points in
    /// cell units, with the committed cell spanning `(x, y)..(x + 1, y + 1)`.
    pub fn pivot_edge(&self) -> Option<((f32, f32), (f32, f32))> {
        let roll = self.current_roll()?;
        let x = roll.from.x as f32;
        let y = roll.from.y as f32;
        Some(match roll.direction {
            Direction::Up => ((x, y), (x + 1.0, y)),
            Direction::Down => ((x, y + 1.0), (x + 1.0, y + 1.0)),
            Direction::Left => ((x, y), (x, y + 1.0)),
            Direction::Right => ((x + 1.0, y), (x + 1.0, y + 1.0)),
        })
    }

    /// Begin a roll.
    ///
    /// Rejected (false, no state change) while already rolling, or when the
    /// destination is off the board or an obstacle.
    pub fn roll(&mut self, direction: Direction, board: &Board) -> bool {
        if self.is_rolling() {
            return false;
        }

        let to = self.position.step(direction);
        if !board.in_bounds(to) || board.is_obstacle(to) {
            return false;
        }

        self.state = DieState::Rolling(Roll {
            direction,
            from: self.position,
            to,
            angle: 0.0,
        });
        true
    }

    /// Advance the roll in flight by `step` radians.
    ///
    /// Returns the landing cell on the tick the quarter turn completes.
    pub fn advance(&mut self, step: f32) -> Option<Pos> {
        let DieState::Rolling(mut roll) = self.state else {
            return None;
        };

        roll.angle = (roll.angle + step).min(ROLL_ANGLE);
        if roll.angle < ROLL_ANGLE - LANDING_EPSILON {
            self.state = DieState::Rolling(roll);
            return None;
        }

        self.position = roll.to;
        self.faces = self.faces.rolled(roll.direction);
        self.state = DieState::Idle;
        Some(roll.to)
    }

    /// Force Idle, restore canonical faces and move to `start`.
    pub fn reset(&mut self, start: Pos) {
        self.position = start;
        self.faces = FaceValues::CANONICAL;
        self.state = DieState::Idle;
    }
}
