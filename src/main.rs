//! Terminal snake runner (default binary).
//!
//! This is the primary gameplay entrypoint and the engine's driver: it
//! supplies the tick cadence, feeds key presses into the turn
//! scheduler, renders snapshots, and (unless disabled) publishes them
//! to the replication server.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::adapter::{spawn_server_thread, ServerConfig, SnapshotStore};
use tui_snake::core::{GameConfig, GameSession, SessionSnapshot};
use tui_snake::input::{map_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(score) => {
            println!("[Game] final score: {}", score);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run(term: &mut TerminalRenderer) -> Result<u32> {
    let mut session = GameSession::new(GameConfig::default())?;

    let store = if ServerConfig::is_disabled() {
        None
    } else {
        let store = SnapshotStore::new(session.snapshot());
        let _server = spawn_server_thread(ServerConfig::from_env(), store.clone());
        Some(store)
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render (and replicate) the current state.
        session.snapshot_into(&mut snap);
        if let Some(store) = &store {
            store.publish(&snap);
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(session.score());
                    }
                    if let Some(direction) = map_key_event(key) {
                        session.request_turn(direction);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick()?;
        }
    }
}
