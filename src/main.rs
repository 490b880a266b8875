//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses until the next tick, steps the simulation
//! once per tick and redraws through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use tui_boulder::config::Config;
use tui_boulder::core::{Game, Grid};
use tui_boulder::input::{action_for_event, should_quit};
use tui_boulder::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_boulder::types::DEFAULT_LAYOUT;

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging()?;

    let grid = Grid::from_codes(&DEFAULT_LAYOUT).context("loading built-in layout")?;
    let game = Game::with_drain_order(grid, config.drain_order());
    log::info!(
        "starting at {} fps, {:?} input drain",
        config.fps,
        config.drain_order()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game, config: &Config) -> Result<()> {
    let view = GameView::new(config.cell_width, 1);
    let tick_duration = config.tick_duration();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit after {} ticks", game.tick());
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.step();
        }
    }
}
