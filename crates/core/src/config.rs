//! Game configuration.
//!
//! Defaults describe the standard puzzle. Hosts may override them from the
//! environment (`DICEPATH_*`) and then from their own flags.

use crate::board::Board;
use crate::error::{ConfigError, Result};
use crate::types::{
    Pos, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_ROLL_STEP, MAX_OBSTACLES,
    OBSTACLE_INTERVAL_MAX, OBSTACLE_INTERVAL_MIN,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub start: Pos,
    /// Obstacles placed per generation (0..=5)
    pub obstacle_count: usize,
    /// Accepted moves between obstacle relocations, drawn from `min..=max`
    pub obstacle_interval_min: u32,
    pub obstacle_interval_max: u32,
    /// Pivot angle (radians) added per tick
    pub roll_step: f32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            start: Pos::new(0, 0),
            obstacle_count: MAX_OBSTACLES,
            obstacle_interval_min: OBSTACLE_INTERVAL_MIN,
            obstacle_interval_max: OBSTACLE_INTERVAL_MAX,
            roll_step: DEFAULT_ROLL_STEP,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Reads `DICEPATH_WIDTH`, `DICEPATH_HEIGHT`, `DICEPATH_SEED` and
    /// `DICEPATH_OBSTACLES`; missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            width: parse("DICEPATH_WIDTH")
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(defaults.width),
            height: parse("DICEPATH_HEIGHT")
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(defaults.height),
            seed: parse("DICEPATH_SEED")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.seed),
            obstacle_count: parse("DICEPATH_OBSTACLES")
                .map(|v| v as usize)
                .unwrap_or(defaults.obstacle_count),
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_start(mut self, start: Pos) -> Self {
        self.start = start;
        self
    }

    pub fn with_obstacle_count(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    pub fn with_obstacle_interval(mut self, min: u32, max: u32) -> Self {
        self.obstacle_interval_min = min;
        self.obstacle_interval_max = max;
        self
    }

    pub fn with_roll_step(mut self, step: f32) -> Self {
        self.roll_step = step;
        self
    }

    /// Check every field and build the empty board it describes.
    pub fn build_board(&self) -> Result<Board> {
        if self.obstacle_interval_min == 0 || self.obstacle_interval_min > self.obstacle_interval_max
        {
            return Err(ConfigError::InvalidObstacleInterval {
                min: self.obstacle_interval_min,
                max: self.obstacle_interval_max,
            });
        }
        if !self.roll_step.is_finite() || self.roll_step <= 0.0 {
            return Err(ConfigError::InvalidRollStep(self.roll_step));
        }
        Board::new(self.width, self.height, self.start)?.with_obstacle_count(self.obstacle_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().build_board().is_ok());
    }

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("DICEPATH_WIDTH", "9"),
            ("DICEPATH_HEIGHT", "nope"),
            ("DICEPATH_SEED", " 42 "),
            ("DICEPATH_OBSTACLES", "2"),
        ]
        .into_iter()
        .collect();
        let cfg = GameConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.width, 9);
        assert_eq!(cfg.height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.obstacle_count, 2);
    }

    #[test]
    fn out_of_range_width_keeps_default() {
        let cfg = GameConfig::from_lookup(|k| (k == "DICEPATH_WIDTH").then(|| "300".to_string()));
        assert_eq!(cfg.width, DEFAULT_BOARD_WIDTH);
    }

    #[test]
    fn rejects_bad_interval_and_step() {
        assert_eq!(
            GameConfig::default().with_obstacle_interval(20, 15).build_board(),
            Err(ConfigError::InvalidObstacleInterval { min: 20, max: 15 })
        );
        assert!(GameConfig::default()
            .with_obstacle_interval(0, 3)
            .build_board()
            .is_err());
        assert!(GameConfig::default().with_roll_step(0.0).build_board().is_err());
        assert!(GameConfig::default()
            .with_roll_step(f32::NAN)
            .build_board()
            .is_err());
    }

    #[test]
    fn rejects_tiny_board() {
        assert!(matches!(
            GameConfig::default().with_size(2, 2).build_board(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }
}
