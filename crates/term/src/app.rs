//! Console run loop.
//!
//! The loop owns the game and advances it once per [`TICK_MS`]. Keyboard
//! input is read on a dedicated thread so the blocking `event::read` never
//! stalls rendering; the thread only writes into a shared [`PendingInput`]
//! cell, which the loop drains at the top of every tick.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use snake_core::Game;
use snake_input::{map_key_event, PendingInput};
use snake_types::{GameCommand, TICK_MS};

use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Run the console front-end until the player quits.
pub fn run(mut game: Game) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_loop(&mut term, &mut game);

    // Always restore the terminal, even when the loop errored.
    let _ = term.exit();
    result
}

fn run_loop(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let pending = Arc::new(PendingInput::new());
    let reader = spawn_input_thread(Arc::clone(&pending));

    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS);
    let mut last_size = terminal::size()?;

    log::info!(
        "console front-end up ({}x{} cells)",
        game.width(),
        game.height()
    );

    while !pending.quit_requested() {
        let frame_start = Instant::now();

        if pending.take_start() {
            game.start();
            log::debug!("round started");
        }
        if let Some(dir) = pending.take_direction() {
            game.set_direction(dir);
        }

        let before = game.status();
        let after = game.tick();
        if before != after {
            log::debug!("status {:?} -> {:?}", before, after);
        }

        let size = terminal::size().unwrap_or(last_size);
        if size != last_size {
            term.invalidate();
            last_size = size;
        }
        let fb = view.render(game, Viewport::new(size.0, size.1));
        term.draw(&fb)?;

        // Fixed cadence: sleep out the remainder of the tick interval.
        if let Some(rest) = tick.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    // The reader returns by itself once it has seen the quit key.
    let _ = reader.join();
    log::info!("console front-end down");
    Ok(())
}

/// Blocking keyboard reader. Writes the latest turn request and the sticky
/// start/quit flags into `pending` and exits after a quit.
fn spawn_input_thread(pending: Arc<PendingInput>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(err) => {
                log::warn!("input error, shutting down: {}", err);
                pending.request_quit();
                return;
            }
        };

        if let Event::Key(key) = ev {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match map_key_event(key) {
                Some(GameCommand::Quit) => {
                    pending.request_quit();
                    return;
                }
                Some(GameCommand::Start) => pending.request_start(),
                Some(GameCommand::Turn(dir)) => pending.set_direction(dir),
                None => {}
            }
        }
    })
}
