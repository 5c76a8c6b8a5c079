//! Board module - manages the puzzle grid
//!
//! The board is a `width x height` grid where each cell is normal floor, a
//! numbered target (1..=6) or an obstacle. Uses a flat row-major vector for
//! cache locality; `(x, y)` maps to `y * width + x`.
//!
//! Layout rules:
//! - Exactly six targets, valued as a permutation of 1..=6, never on the start cell.
//! - Up to five obstacles, never on a target, the start cell or the excluded cell
//!   (the die's cell when they are generated).
//! - Targets stay put for a session; obstacles are regenerated on demand.

use arrayvec::ArrayVec;

use crate::error::{ConfigError, Result};
use crate::rng::SimpleRng;
use crate::types::{Pos, MAX_OBSTACLES, TARGET_COUNT};

/// Largest supported dimension (coordinates are `i8`)
pub const MAX_BOARD_DIM: u8 = i8::MAX as u8;

/// Role of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellRole {
    #[default]
    Normal,
    /// Numbered target, value in 1..=6
    Target(u8),
    Obstacle,
}

/// Display emphasis of a target relative to collection progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    /// Not yet due
    #[default]
    Neutral,
    /// The next value to collect
    Emphasized,
    /// Already collected
    Dimmed,
}

/// The puzzle board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    start: Pos,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellRole>,
    /// `targets[v - 1]` is where value `v` sits
    targets: [Option<Pos>; TARGET_COUNT],
    obstacles: ArrayVec<Pos, MAX_OBSTACLES>,
    /// How many obstacles `generate_obstacles` tries to place
    obstacle_count: usize,
    highlights: [Highlight; TARGET_COUNT],
}

impl Board {
    /// Create an empty board, validating that it can host a full layout.
    pub fn new(width: u8, height: u8, start: Pos) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                width,
                height,
                max: MAX_BOARD_DIM,
            });
        }
        if start.x < 0 || start.y < 0 || start.x as u8 >= width || start.y as u8 >= height {
            return Err(ConfigError::StartOutOfBounds {
                start,
                width,
                height,
            });
        }
        let available = (width as usize) * (height as usize) - 1;
        if available < TARGET_COUNT {
            return Err(ConfigError::BoardTooSmall {
                width,
                height,
                available,
                required: TARGET_COUNT,
            });
        }

        Ok(Self {
            width,
            height,
            start,
            cells: vec![CellRole::Normal; (width as usize) * (height as usize)],
            targets: [None; TARGET_COUNT],
            obstacles: ArrayVec::new(),
            obstacle_count: MAX_OBSTACLES,
            highlights: [Highlight::Neutral; TARGET_COUNT],
        })
    }

    /// Set how many obstacles each generation places (at most [`MAX_OBSTACLES`]).
    pub fn with_obstacle_count(mut self, count: usize) -> Result<Self> {
        if count > MAX_OBSTACLES {
            return Err(ConfigError::TooManyObstacles {
                count,
                max: MAX_OBSTACLES,
            });
        }
        self.obstacle_count = count;
        Ok(self)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    fn pos_at(&self, idx: usize) -> Pos {
        let w = self.width as usize;
        Pos::new((idx % w) as i8, (idx / w) as i8)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u8) < self.width && (pos.y as u8) < self.height
    }

    /// Role at `pos`, or None if out of bounds
    pub fn role(&self, pos: Pos) -> Option<CellRole> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Bounds-checked obstacle test; out-of-range positions are not obstacles.
    pub fn is_obstacle(&self, pos: Pos) -> bool {
        matches!(self.role(pos), Some(CellRole::Obstacle))
    }

    /// True iff `pos` is the target carrying `value`.
    pub fn check_target(&self, pos: Pos, value: u8) -> bool {
        matches!(self.role(pos), Some(CellRole::Target(v)) if v == value)
    }

    /// Where the target with `value` sits, once targets are generated
    pub fn target_position(&self, value: u8) -> Option<Pos> {
        let idx = (value as usize).checked_sub(1)?;
        self.targets.get(idx).copied().flatten()
    }

    /// Target positions indexed by `value - 1`
    pub fn targets(&self) -> &[Option<Pos>; TARGET_COUNT] {
        &self.targets
    }

    pub fn obstacles(&self) -> &[Pos] {
        &self.obstacles
    }

    pub fn highlight(&self, value: u8) -> Highlight {
        (value as usize)
            .checked_sub(1)
            .and_then(|i| self.highlights.get(i).copied())
            .unwrap_or_default()
    }

    /// Recompute target emphasis given the next value the player needs.
    ///
    /// Values below `next_expected` are dimmed, the value itself emphasized,
    /// everything above neutral. `next_expected == 7` dims all six.
    pub fn update_highlights(&mut self, next_expected: u8) {
        for (i, h) in self.highlights.iter_mut().enumerate() {
            let value = (i + 1) as u8;
            *h = if value < next_expected {
                Highlight::Dimmed
            } else if value == next_expected {
                Highlight::Emphasized
            } else {
                Highlight::Neutral
            };
        }
    }

    /// Place the six targets. Clears any previous targets and obstacles.
    pub fn generate_targets(&mut self, rng: &mut SimpleRng) {
        self.cells.fill(CellRole::Normal);
        self.obstacles.clear();
        self.targets = [None; TARGET_COUNT];

        let start = self.start;
        let mut candidates: Vec<Pos> = (0..self.cells.len())
            .map(|i| self.pos_at(i))
            .filter(|&p| p != start)
            .collect();
        rng.shuffle(&mut candidates);

        let mut values: [u8; TARGET_COUNT] = [1, 2, 3, 4, 5, 6];
        rng.shuffle(&mut values);

        // `new` guarantees at least TARGET_COUNT candidates.
        for (&pos, &value) in candidates.iter().zip(values.iter()) {
            if let Some(idx) = self.index(pos) {
                self.cells[idx] = CellRole::Target(value);
                self.targets[(value - 1) as usize] = Some(pos);
            }
        }
    }

    /// Replace the obstacle layout.
    ///
    /// Candidates are all normal cells except the start cell and `exclude`.
    /// When fewer candidates than `obstacle_count` remain, all of them are used.
    pub fn generate_obstacles(&mut self, exclude: Pos, rng: &mut SimpleRng) {
        self.clear_obstacles();

        let start = self.start;
        let mut candidates: Vec<Pos> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == CellRole::Normal)
            .map(|(i, _)| self.pos_at(i))
            .filter(|&p| p != start && p != exclude)
            .collect();
        rng.shuffle(&mut candidates);

        let take = self.obstacle_count.min(candidates.len());
        for &pos in &candidates[..take] {
            self.place_obstacle(pos);
        }
    }

    /// Place a single obstacle by hand.
    ///
    /// Returns false when `pos` is out of bounds, the start cell, not a normal
    /// cell, or the obstacle capacity is exhausted.
    pub fn place_obstacle(&mut self, pos: Pos) -> bool {
        if pos == self.start || self.obstacles.is_full() {
            return false;
        }
        match self.index(pos) {
            Some(idx) if self.cells[idx] == CellRole::Normal => {
                self.cells[idx] = CellRole::Obstacle;
                self.obstacles.push(pos);
                true
            }
            _ => false,
        }
    }

    pub fn clear_obstacles(&mut self) {
        for i in 0..self.obstacles.len() {
            let pos = self.obstacles[i];
            if let Some(idx) = self.index(pos) {
                self.cells[idx] = CellRole::Normal;
            }
        }
        self.obstacles.clear();
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[CellRole] {
        &self.cells
    }
}
