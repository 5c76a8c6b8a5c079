use crate::board::{CellRole, Highlight};
use crate::die::{FaceValues, Roll};
use crate::game::SessionPhase;
use crate::types::{Pos, TARGET_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DieSnapshot {
    pub position: Pos,
    pub faces: FaceValues,
    pub roll: Option<Roll>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub start: Pos,
    /// Row-major cell roles
    pub cells: Vec<CellRole>,
    /// Indexed by `value - 1`
    pub highlights: [Highlight; TARGET_COUNT],
    pub die: DieSnapshot,
    pub collected: u8,
    pub next_expected: Option<u8>,
    pub move_count: u32,
    pub obstacle_interval: u32,
    pub total_moves: u32,
    pub camera_angle: f32,
    pub phase: SessionPhase,
    pub session_id: u32,
}

impl GameSnapshot {
    /// Role at `pos`, or None outside the board
    pub fn role(&self, pos: Pos) -> Option<CellRole> {
        if pos.x < 0 || pos.y < 0 || pos.x as u8 >= self.width || pos.y as u8 >= self.height {
            return None;
        }
        self.cells
            .get(pos.y as usize * self.width as usize + pos.x as usize)
            .copied()
    }

    pub fn highlight(&self, value: u8) -> Highlight {
        (value as usize)
            .checked_sub(1)
            .and_then(|i| self.highlights.get(i).copied())
            .unwrap_or_default()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            start: Pos::default(),
            cells: Vec::new(),
            highlights: [Highlight::Neutral; TARGET_COUNT],
            die: DieSnapshot::default(),
            collected: 0,
            next_expected: None,
            move_count: 0,
            obstacle_interval: 0,
            total_moves: 0,
            camera_angle: 0.0,
            phase: SessionPhase::NotStarted,
            session_id: 0,
        }
    }
}
