//! Game controller - ties board, die and camera into a playable session
//!
//! The controller owns every piece of mutable game state. Hosts construct it,
//! feed it intents and one `tick()` per frame, read snapshots for rendering and
//! drain [`GameEvent`]s to update their UI.
//!
//! Session lifecycle:
//!
//! ```text
//! NotStarted --start()--> Active --sixth target collected--> Completed
//!      ^                    |  ^                                 |
//!      |                    +--+ reset()/start()                 |
//!      +------------------------- reset()/start() ---------------+ (back to Active)
//! ```
//!
//! There is no losing state: play is untimed with unlimited moves.

use crate::board::Board;
use crate::camera::{orbit, remap_by_camera};
use crate::config::GameConfig;
use crate::die::Die;
use crate::error::Result;
use crate::rng::SimpleRng;
use crate::snapshot::{DieSnapshot, GameSnapshot};
use crate::types::{Direction, Pos, TARGET_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Active,
    Completed,
}

/// Notifications for the host, drained with [`GameController::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Collection progress changed (also sent with 0 when a session begins)
    CollectedNumbersChanged(u8),
    /// All six targets collected; sent once per session
    GameCompleted,
    /// A roll finished on `at` with `bottom` facing down
    RollLanded { at: Pos, bottom: u8 },
    /// The obstacle layout was regenerated
    ObstaclesRelocated,
}

#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    die: Die,
    rng: SimpleRng,
    phase: SessionPhase,
    /// Targets collected so far, always the values 1..=collected
    collected: u8,
    /// Accepted moves since the last obstacle relocation
    move_count: u32,
    obstacle_interval: u32,
    /// Relocation due when the roll in flight lands
    relocation_pending: bool,
    camera_angle: f32,
    /// Monotonic session id (increments on every start/reset)
    session_id: u32,
    /// Accepted moves this session
    total_moves: u32,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Validate the configuration and build an idle controller.
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = config.build_board()?;
        let die = Die::new(config.start);
        let rng = SimpleRng::new(config.seed);
        let obstacle_interval = config.obstacle_interval_min;

        Ok(Self {
            config,
            board,
            die,
            rng,
            phase: SessionPhase::NotStarted,
            collected: 0,
            move_count: 0,
            obstacle_interval,
            relocation_pending: false,
            camera_angle: 0.0,
            session_id: 0,
            total_moves: 0,
            events: Vec::new(),
        })
    }

    /// Begin a fresh session: new targets, new obstacles, die home.
    ///
    /// Calling this on an active or completed session restarts it.
    pub fn start(&mut self) {
        let start = self.board.start();
        self.board.generate_targets(&mut self.rng);
        self.board.generate_obstacles(start, &mut self.rng);
        self.board.update_highlights(1);
        self.die.reset(start);

        self.collected = 0;
        self.move_count = 0;
        self.total_moves = 0;
        self.relocation_pending = false;
        self.obstacle_interval = self.draw_obstacle_interval();
        self.phase = SessionPhase::Active;
        self.session_id = self.session_id.wrapping_add(1);

        self.events.push(GameEvent::CollectedNumbersChanged(0));
    }

    pub fn reset(&mut self) {
        self.start();
    }

    fn draw_obstacle_interval(&mut self) -> u32 {
        self.rng.range_inclusive(
            self.config.obstacle_interval_min,
            self.config.obstacle_interval_max,
        )
    }

    /// Roll the die one cell in a screen-relative direction.
    ///
    /// Returns false, changing nothing, when the session is not active, a roll
    /// is already in flight, or the destination is blocked.
    pub fn move_cube(&mut self, direction: Direction) -> bool {
        if self.phase != SessionPhase::Active || self.die.is_rolling() {
            return false;
        }

        let board_dir = remap_by_camera(direction, self.camera_angle);
        if !self.die.roll(board_dir, &self.board) {
            return false;
        }

        self.total_moves = self.total_moves.saturating_add(1);
        self.move_count += 1;
        if self.move_count >= self.obstacle_interval {
            self.relocation_pending = true;
            self.move_count = 0;
            self.obstacle_interval = self.draw_obstacle_interval();
        }
        true
    }

    /// Advance one frame.
    ///
    /// Returns true on the tick a roll lands. Landing runs any due obstacle
    /// relocation (excluding the landing cell) and then the target check.
    pub fn tick(&mut self) -> bool {
        let Some(landed) = self.die.advance(self.config.roll_step) else {
            return false;
        };

        if self.relocation_pending {
            self.relocation_pending = false;
            self.board.generate_obstacles(landed, &mut self.rng);
            self.events.push(GameEvent::ObstaclesRelocated);
        }

        self.events.push(GameEvent::RollLanded {
            at: landed,
            bottom: self.die.bottom_value(),
        });
        self.check_target_cell();
        true
    }

    /// Collect the target under the die if its value is the next one due.
    ///
    /// Returns true when a target was collected.
    pub fn check_target_cell(&mut self) -> bool {
        if self.phase != SessionPhase::Active {
            return false;
        }

        let value = self.die.bottom_value();
        let expected = self.collected + 1;
        if value != expected || !self.board.check_target(self.die.position(), value) {
            return false;
        }

        self.collected = expected;
        self.board.update_highlights(self.collected + 1);
        self.events
            .push(GameEvent::CollectedNumbersChanged(self.collected));

        if self.collected as usize == TARGET_COUNT {
            self.phase = SessionPhase::Completed;
            self.events.push(GameEvent::GameCompleted);
        }
        true
    }

    pub fn rotate_camera_left(&mut self) {
        self.camera_angle = orbit(self.camera_angle, -1);
    }

    pub fn rotate_camera_right(&mut self) {
        self.camera_angle = orbit(self.camera_angle, 1);
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn is_cube_rotating(&self) -> bool {
        self.die.is_rolling()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn collected(&self) -> u8 {
        self.collected
    }

    /// Value the player must land on next, if any remain
    pub fn next_expected(&self) -> Option<u8> {
        let next = self.collected + 1;
        (next as usize <= TARGET_COUNT).then_some(next)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn obstacle_interval(&self) -> u32 {
        self.obstacle_interval
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn camera_angle(&self) -> f32 {
        self.camera_angle
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn die(&self) -> &Die {
        &self.die
    }

    /// Take all queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.start = self.board.start();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        for (i, h) in out.highlights.iter_mut().enumerate() {
            *h = self.board.highlight((i + 1) as u8);
        }
        out.die = DieSnapshot {
            position: self.die.position(),
            faces: self.die.faces(),
            roll: self.die.current_roll(),
        };
        out.collected = self.collected;
        out.next_expected = self.next_expected();
        out.move_count = self.move_count;
        out.obstacle_interval = self.obstacle_interval;
        out.total_moves = self.total_moves;
        out.camera_angle = self.camera_angle;
        out.phase = self.phase;
        out.session_id = self.session_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
