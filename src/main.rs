//! Terminal dice path runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_dicepath::term`.
//! Configuration comes from `DICEPATH_*` environment variables, overridden by
//! `--seed`, `--width`, `--height` and `--cell-width`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_dicepath::cli::parse_args;
use tui_dicepath::core::{GameConfig, GameController, GameSnapshot};
use tui_dicepath::host::apply_intent;
use tui_dicepath::input::{handle_key_event, should_quit};
use tui_dicepath::session_log::SessionLog;
use tui_dicepath::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_dicepath::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let config = cli.apply(GameConfig::from_env());
    let game = GameController::new(config).context("invalid game configuration")?;
    let log = SessionLog::from_env()?;
    let view = cli.view();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, view, game, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    view: GameView,
    mut game: GameController,
    mut log: SessionLog,
) -> Result<()> {
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        apply_intent(&mut game, &mut log, intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
            for ev in game.take_events() {
                log.event(&game, ev);
            }
        }
    }
}
