//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously presented one; only changed runs
//! of cells are re-encoded. A size change or `invalidate()` forces a full redraw.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last presented frame
    prev: Option<FrameBuffer>,
    /// Encoded command bytes, reused across frames
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush_scratch()
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush_scratch()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next present to redraw everything (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale content of the right allocation; callers
    /// render into it again for the next frame.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match self.prev.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.scratch)?;
                std::mem::swap(&mut prev, fb);
                self.prev = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.scratch)?;
                let blank = FrameBuffer::new(fb.width(), fb.height());
                self.prev = Some(std::mem::replace(fb, blank));
            }
        }
        self.flush_scratch()
    }

    fn flush_scratch(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.scratch)
            .context("write frame to terminal")?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        emit_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells that differ between `prev` and `next` into `out`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        emit_run(next, x, y, len, &mut style, out)
    })?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn emit_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for cx in x..x + len {
        let cell = fb.get(cx, y).unwrap_or_default();
        if *style != Some(cell.style) {
            queue_style(out, cell.style)?;
            *style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each maximal horizontal run of differing cells,
/// row by row. Stops at the first error.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(s)) => {
                    f(s, y, x - s)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = run_start {
            f(s, y, next.width() - s)?;
        }
    }
    Ok(())
}
