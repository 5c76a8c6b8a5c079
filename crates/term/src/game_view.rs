//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn the way the orbiting camera sees it: at 90° the board's
//! right edge is at the top of the screen, and so on. Pressing "up" always rolls
//! the die toward the top of the screen.

use std::f32::consts::FRAC_PI_4;

use crate::core::camera::quarter_turns;
use crate::core::{CellRole, GameSnapshot, Highlight, SessionPhase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Pos, TARGET_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FLOOR_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3 columns fit a digit with padding and roughly square the cell.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

/// Board dimensions and position of one cell as seen through the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGrid {
    pub cols: u16,
    pub rows: u16,
    quarter: usize,
    width: u8,
    height: u8,
}

impl ScreenGrid {
    pub fn new(width: u8, height: u8, camera_angle: f32) -> Self {
        let quarter = quarter_turns(camera_angle);
        let (cols, rows) = if quarter % 2 == 0 {
            (width as u16, height as u16)
        } else {
            (height as u16, width as u16)
        };
        Self {
            cols,
            rows,
            quarter,
            width,
            height,
        }
    }

    /// Screen column/row of a board cell.
    pub fn project(&self, pos: Pos) -> (u16, u16) {
        let x = pos.x as u16;
        let y = pos.y as u16;
        let w = self.width as u16;
        let h = self.height as u16;
        match self.quarter {
            0 => (x, y),
            1 => (y, w - 1 - x),
            2 => (w - 1 - x, h - 1 - y),
            _ => (h - 1 - y, x),
        }
    }
}

/// Screen direction that rolls the die in `board_dir` at this camera angle.
fn screen_direction(board_dir: Direction, camera_angle: f32) -> Direction {
    // Each camera quarter turns the remap one step clockwise; undo it.
    (0..quarter_turns(camera_angle)).fold(board_dir, |d, _| d.rotate_ccw())
}

fn arrow(dir: Direction) -> char {
    match dir {
        Direction::Up => '↑',
        Direction::Down => '↓',
        Direction::Left => '←',
        Direction::Right => '→',
    }
}

fn target_style(h: Highlight) -> CellStyle {
    match h {
        Highlight::Emphasized => CellStyle::new(Rgb::new(255, 215, 0), FLOOR_BG).bold(),
        Highlight::Dimmed => CellStyle::new(Rgb::new(90, 90, 100), FLOOR_BG).dim(),
        Highlight::Neutral => CellStyle::new(Rgb::new(120, 200, 255), FLOOR_BG),
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid = ScreenGrid::new(snap.width, snap.height, snap.camera_angle);
        let frame_w = grid.cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid.rows.saturating_mul(self.cell_h).saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        for y in 0..snap.height as i8 {
            for x in 0..snap.width as i8 {
                let pos = Pos::new(x, y);
                let (sx, sy) = grid.project(pos);
                match snap.role(pos).unwrap_or_default() {
                    CellRole::Normal => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), FLOOR_BG).dim();
                        self.draw_cell_text(fb, origin_x, origin_y, sx, sy, "·", style);
                    }
                    CellRole::Obstacle => {
                        let style = CellStyle::new(Rgb::new(200, 80, 80), FLOOR_BG);
                        self.fill_cell(fb, origin_x, origin_y, sx, sy, '▓', style);
                    }
                    CellRole::Target(v) => {
                        let mut buf = [0u8; 4];
                        let digit = char::from(b'0' + v).encode_utf8(&mut buf);
                        self.draw_cell_text(
                            fb,
                            origin_x,
                            origin_y,
                            sx,
                            sy,
                            digit,
                            target_style(snap.highlight(v)),
                        );
                    }
                }
            }
        }

        self.draw_die(fb, snap, &grid, origin_x, origin_y);
        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, origin_y);

        match snap.phase {
            SessionPhase::NotStarted => {
                self.draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, "PRESS ENTER")
            }
            SessionPhase::Completed => {
                self.draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, "COMPLETE")
            }
            SessionPhase::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Die shows its top value. Mid-roll it jumps to the destination once the
    /// pivot passes 45°, with an arrow pointing along the roll.
    fn draw_die(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        grid: &ScreenGrid,
        origin_x: u16,
        origin_y: u16,
    ) {
        if snap.width == 0 || snap.height == 0 {
            return;
        }
        let die_style = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(240, 240, 240)).bold();
        let top = char::from(b'0' + snap.die.faces.top);

        let (pos, marker) = match snap.die.roll {
            Some(roll) => {
                let pos = if roll.angle >= FRAC_PI_4 {
                    roll.to
                } else {
                    roll.from
                };
                let dir = screen_direction(roll.direction, snap.camera_angle);
                (pos, Some(arrow(dir)))
            }
            None => (snap.die.position, None),
        };

        let (sx, sy) = grid.project(pos);
        let (px, py) = self.cell_origin(origin_x, origin_y, sx, sy);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', die_style);
        let mid = px.saturating_add(self.cell_w / 2);
        let row = py.saturating_add(self.cell_h / 2);
        fb.put_char(mid, row, top, die_style);
        if let Some(m) = marker {
            if self.cell_w >= 3 {
                fb.put_char(mid.saturating_add(1), row, m, die_style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '╭', style);
        fb.put_char(right, y, '╮', style);
        fb.put_char(x, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        sx: u16,
        sy: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(origin_x, origin_y, sx, sy);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Top-left terminal cell of screen cell `(sx, sy)`, inside the border.
    fn cell_origin(&self, origin_x: u16, origin_y: u16, sx: u16, sy: u16) -> (u16, u16) {
        (
            origin_x
                .saturating_add(1)
                .saturating_add(sx.saturating_mul(self.cell_w)),
            origin_y
                .saturating_add(1)
                .saturating_add(sy.saturating_mul(self.cell_h)),
        )
    }

    fn draw_cell_text(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        sx: u16,
        sy: u16,
        text: &str,
        style: CellStyle,
    ) {
        self.fill_cell(fb, origin_x, origin_y, sx, sy, ' ', style);
        let (px, py) = self.cell_origin(origin_x, origin_y, sx, sy);
        fb.put_str(
            px.saturating_add(self.cell_w / 2),
            py.saturating_add(self.cell_h / 2),
            text,
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "TARGETS", label);
        y += 1;
        let mut x = panel_x;
        for v in 1..=TARGET_COUNT as u8 {
            let style = CellStyle {
                bg: PANEL_BG,
                ..target_style(snap.highlight(v))
            };
            fb.put_char(x, y, char::from(b'0' + v), style);
            x += 2;
        }
        y += 2;

        fb.put_str(panel_x, y, "COLLECTED", label);
        y += 1;
        let x = fb.put_u32(panel_x, y, snap.collected as u32, value);
        fb.put_str(x, y, "/6", value);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        match snap.next_expected {
            Some(v) => fb.put_u32(panel_x, y, v as u32, value),
            None => fb.put_str(panel_x, y, "-", value),
        };
        y += 2;

        fb.put_str(panel_x, y, "BOTTOM", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.die.faces.bottom as u32, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.total_moves, value);
        y += 2;

        fb.put_str(panel_x, y, "SHIFT IN", label);
        y += 1;
        fb.put_u32(
            panel_x,
            y,
            snap.obstacle_interval.saturating_sub(snap.move_count),
            value,
        );
        y += 2;

        fb.put_str(panel_x, y, "CAMERA", label);
        y += 1;
        let x = fb.put_u32(panel_x, y, (quarter_turns(snap.camera_angle) * 90) as u32, value);
        fb.put_char(x, y, '°', value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
