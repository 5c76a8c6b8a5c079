//! Opt-in JSON-lines session log.
//!
//! Enabled by `DICEPATH_LOG_PATH`. Each record is one `serde_json` object per
//! line, tagged by `"type"`. A failed write turns the log off; the game keeps
//! running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameController, GameEvent};
use crate::types::{Direction, Intent, Pos};

pub const LOG_PATH_ENV: &str = "DICEPATH_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        session: u32,
        seed: u32,
        width: u8,
        height: u8,
        targets: Vec<[i8; 2]>,
        obstacles: Vec<[i8; 2]>,
    },
    Move {
        session: u32,
        intent: &'static str,
        board: &'static str,
        accepted: bool,
    },
    Landed {
        session: u32,
        at: [i8; 2],
        bottom: u8,
    },
    ObstaclesRelocated {
        session: u32,
        obstacles: Vec<[i8; 2]>,
    },
    Collected {
        session: u32,
        count: u8,
    },
    Completed {
        session: u32,
        moves: u32,
    },
}

fn xy(p: Pos) -> [i8; 2] {
    [p.x, p.y]
}

pub struct SessionLog {
    out: Option<BufWriter<File>>,
    line: Vec<u8>,
}

impl SessionLog {
    pub fn disabled() -> Self {
        Self {
            out: None,
            line: Vec::new(),
        }
    }

    /// Open the file named by `DICEPATH_LOG_PATH`, if set and non-empty.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(LOG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            line: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, rec: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.line.clear();
        let ok = serde_json::to_writer(&mut self.line, rec).is_ok() && {
            self.line.push(b'\n');
            out.write_all(&self.line).and_then(|_| out.flush()).is_ok()
        };
        if !ok {
            self.out = None;
        }
    }

    pub fn session_started(&mut self, game: &GameController) {
        if !self.is_enabled() {
            return;
        }
        let board = game.board();
        self.record(&LogRecord::SessionStart {
            session: game.session_id(),
            seed: game.config().seed,
            width: board.width(),
            height: board.height(),
            targets: board.targets().iter().flatten().copied().map(xy).collect(),
            obstacles: board.obstacles().iter().copied().map(xy).collect(),
        });
    }

    /// `board` is the board direction the screen-relative `intent` maps to
    /// under the current camera.
    pub fn move_attempt(
        &mut self,
        game: &GameController,
        intent: Intent,
        board: Direction,
        accepted: bool,
    ) {
        self.record(&LogRecord::Move {
            session: game.session_id(),
            intent: intent.as_str(),
            board: board.as_str(),
            accepted,
        });
    }

    /// Log one drained controller event.
    pub fn event(&mut self, game: &GameController, event: GameEvent) {
        if !self.is_enabled() {
            return;
        }
        let session = game.session_id();
        let rec = match event {
            // Progress 0 marks a new session; logged via `session_started`.
            GameEvent::CollectedNumbersChanged(0) => return,
            GameEvent::CollectedNumbersChanged(count) => LogRecord::Collected { session, count },
            GameEvent::GameCompleted => LogRecord::Completed {
                session,
                moves: game.total_moves(),
            },
            GameEvent::RollLanded { at, bottom } => LogRecord::Landed {
                session,
                at: xy(at),
                bottom,
            },
            GameEvent::ObstaclesRelocated => LogRecord::ObstaclesRelocated {
                session,
                obstacles: game.board().obstacles().iter().copied().map(xy).collect(),
            },
        };
        self.record(&rec);
    }
}
