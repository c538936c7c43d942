//! Engine runtime - fixed-tick timers and mounted game sessions
//!
//! The core games are clock-free state machines. This crate gives them a
//! heartbeat:
//!
//! - [`Engine`]: the seam both games implement (apply intent, tick, report interval)
//! - [`Ticker`]: a single fixed-delay deadline
//! - [`Session`]: owns one engine plus its ticker, re-arming it whenever the
//!   engine's interval or run state changes, and cancelling it on unmount
//!
//! Sessions never spawn threads or sleep. The host asks
//! [`Session::next_timeout`] how long it may block on input, then calls
//! [`Session::poll`] to fire a due tick.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tui_arcade_core::SnakeGame;
//! use tui_arcade_engine::Session;
//!
//! let t0 = Instant::now();
//! let mut session = Session::mount(SnakeGame::new(1), t0);
//! assert_eq!(session.next_timeout(t0), Some(Duration::from_millis(150)));
//!
//! assert!(!session.poll(t0 + Duration::from_millis(149)));
//! assert!(session.poll(t0 + Duration::from_millis(150)));
//!
//! session.unmount();
//! assert_eq!(session.next_timeout(t0), None);
//! ```

use std::time::Duration;

use tui_arcade_core::rng::RandomSource;
use tui_arcade_core::snapshot::{Fingerprint, SnakeSnapshot, TetrisSnapshot};
use tui_arcade_core::{SnakeGame, TetrisGame};
use tui_arcade_types::{RunState, SnakeEvent, SnakeIntent, TetrisIntent, TetrisLockEvent};

pub mod session;
pub mod ticker;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use session::Session;
pub use ticker::Ticker;

/// A game that can be driven by a [`Session`].
pub trait Engine {
    type Intent: Copy;
    type Snapshot: Fingerprint;
    type Event;

    /// Stable name of an intent, for journaling.
    fn intent_name(intent: &Self::Intent) -> &'static str;

    /// Whether `intent` restarts the game.
    fn is_reset(intent: &Self::Intent) -> bool;

    /// Apply an input intent. Returns whether observable state changed.
    fn apply(&mut self, intent: Self::Intent) -> bool;

    /// Advance one simulation step. Returns false if the engine is not running.
    fn tick(&mut self) -> bool;

    /// Interval the next tick should be scheduled at.
    fn tick_interval(&self) -> Duration;

    fn run_state(&self) -> RunState;

    fn score(&self) -> u32;

    fn high_score(&self) -> u32;

    fn snapshot(&self) -> Self::Snapshot;

    /// Take the most recent notable outcome, if any.
    fn take_event(&mut self) -> Option<Self::Event>;
}

impl<R: RandomSource> Engine for SnakeGame<R> {
    type Intent = SnakeIntent;
    type Snapshot = SnakeSnapshot;
    type Event = SnakeEvent;

    fn intent_name(intent: &SnakeIntent) -> &'static str {
        intent.as_str()
    }

    fn is_reset(intent: &SnakeIntent) -> bool {
        matches!(intent, SnakeIntent::Reset)
    }

    fn apply(&mut self, intent: SnakeIntent) -> bool {
        SnakeGame::apply(self, intent)
    }

    fn tick(&mut self) -> bool {
        SnakeGame::tick(self)
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms() as u64)
    }

    fn run_state(&self) -> RunState {
        self.state()
    }

    fn score(&self) -> u32 {
        SnakeGame::score(self)
    }

    fn high_score(&self) -> u32 {
        SnakeGame::high_score(self)
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeGame::snapshot(self)
    }

    fn take_event(&mut self) -> Option<SnakeEvent> {
        self.take_last_event()
    }
}

impl<R: RandomSource> Engine for TetrisGame<R> {
    type Intent = TetrisIntent;
    type Snapshot = TetrisSnapshot;
    type Event = TetrisLockEvent;

    fn intent_name(intent: &TetrisIntent) -> &'static str {
        intent.as_str()
    }

    fn is_reset(intent: &TetrisIntent) -> bool {
        matches!(intent, TetrisIntent::Reset)
    }

    fn apply(&mut self, intent: TetrisIntent) -> bool {
        TetrisGame::apply(self, intent)
    }

    fn tick(&mut self) -> bool {
        TetrisGame::tick(self)
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms() as u64)
    }

    fn run_state(&self) -> RunState {
        self.state()
    }

    fn score(&self) -> u32 {
        TetrisGame::score(self)
    }

    fn high_score(&self) -> u32 {
        TetrisGame::high_score(self)
    }

    fn snapshot(&self) -> TetrisSnapshot {
        TetrisGame::snapshot(self)
    }

    fn take_event(&mut self) -> Option<TetrisLockEvent> {
        self.take_last_event()
    }
}
