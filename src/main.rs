//! Terminal arcade runner (default binary).
//!
//! Mounts one game in a [`Session`], then loops: render when the snapshot
//! changed, wait for input no longer than the next tick deadline, dispatch
//! captured keys, and fire the tick when it is due.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent};

use tui_arcade::config::ArcadeConfig;
use tui_arcade::core::snapshot::Fingerprint;
use tui_arcade::core::{SnakeGame, TetrisGame};
use tui_arcade::engine::{Engine, Session};
use tui_arcade::input::{route, snake_intent, tetris_intent, KeyRoute};
use tui_arcade::journal::{Journal, JournalEvent};
use tui_arcade::recorder::SessionRecorder;
use tui_arcade::term::{FrameBuffer, RenderThrottle, SnakeView, TerminalRenderer, TetrisView, Viewport};
use tui_arcade::types::GameKind;

/// Longest input wait while no tick is scheduled (paused / game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = ArcadeConfig::parse();

    let seed = config.seed.unwrap_or_else(rand::random::<u32>);
    let mut journal = match config.log_path.as_ref() {
        Some(path) => {
            let journal = Journal::open(path)?;
            eprintln!("[Arcade] Journal: {}", path.display());
            journal
        }
        None => Journal::disabled(),
    };
    journal.record(JournalEvent::session_start(config.game, Some(seed)));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let now = Instant::now();
    let result = match config.game {
        GameKind::Snake => {
            let view = SnakeView::default().with_controls(config.show_controls());
            run(
                &mut term,
                &mut journal,
                Session::mount(SnakeGame::new(seed), now),
                snake_intent,
                |snap, vp, fb| view.render_into(snap, vp, fb),
            )
        }
        GameKind::Tetris => {
            let view = TetrisView::default().with_controls(config.show_controls());
            run(
                &mut term,
                &mut journal,
                Session::mount(TetrisGame::new(seed), now),
                tetris_intent,
                |snap, vp, fb| view.render_into(snap, vp, fb),
            )
        }
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    journal.close();

    if let Err(e) = &result {
        eprintln!("[Arcade] {}: {:#}", config.game.as_str(), e);
    }
    result
}

fn run<E, R>(
    term: &mut TerminalRenderer,
    journal: &mut Journal,
    mut session: Session<E>,
    map: fn(KeyEvent) -> Option<E::Intent>,
    render: R,
) -> Result<()>
where
    E: Engine,
    E::Event: Into<JournalEvent>,
    R: Fn(&E::Snapshot, Viewport, &mut FrameBuffer),
{
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::default();
    let mut recorder = SessionRecorder::new(&session);

    loop {
        // Render.
        let now = Instant::now();
        let snap = session.snapshot();
        if throttle.should_render(now, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            render(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = session
            .next_timeout(now)
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match route(key, map) {
                    KeyRoute::Quit => break,
                    KeyRoute::Intent(intent) => {
                        recorder.dispatch(&mut session, journal, intent, Instant::now());
                    }
                    KeyRoute::Passthrough => {}
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        recorder.poll(&mut session, journal, Instant::now());
    }

    recorder.finish(session, journal);
    Ok(())
}
