//! A mounted engine and its single recurring timer.

use std::time::{Duration, Instant};

use crate::{Engine, Ticker};

/// Owns one engine and at most one armed [`Ticker`].
///
/// Timer policy:
/// - no timer while the engine is Paused or GameOver
/// - a fresh timer whenever the engine's interval differs from the armed one
/// - no timer at all once unmounted
///
/// Intents are applied to the engine as soon as they are dispatched, so the
/// next tick always observes the latest input.
#[derive(Debug)]
pub struct Session<E: Engine> {
    engine: E,
    ticker: Option<Ticker>,
    mounted: bool,
    /// Number of timers armed since mount.
    arms: u64,
}

impl<E: Engine> Session<E> {
    /// Mount `engine` and arm its timer if it is running
    pub fn mount(engine: E, now: Instant) -> Self {
        let mut session = Self {
            engine,
            ticker: None,
            mounted: true,
            arms: 0,
        };
        session.sync_timer(now);
        session
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Interval of the armed timer, if any
    pub fn timer_interval(&self) -> Option<Duration> {
        self.ticker.map(|t| t.interval())
    }

    /// How many times a timer has been (re)armed
    pub fn arm_count(&self) -> u64 {
        self.arms
    }

    pub fn snapshot(&self) -> E::Snapshot {
        self.engine.snapshot()
    }

    pub fn take_event(&mut self) -> Option<E::Event> {
        self.engine.take_event()
    }

    /// Apply an intent immediately. Ignored after unmount.
    pub fn dispatch(&mut self, intent: E::Intent, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let changed = self.engine.apply(intent);
        self.sync_timer(now);
        changed
    }

    /// Fire the timer if it is due. Returns whether a tick ran.
    ///
    /// At most one tick runs per call; a late poll does not catch up.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };
        if !ticker.fire(now) {
            return false;
        }
        let ticked = self.engine.tick();
        self.sync_timer(now);
        ticked
    }

    /// How long the host may wait before the next tick is due.
    ///
    /// `None` means no tick is scheduled (paused, game over, or unmounted).
    pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
        self.ticker.map(|t| t.time_until(now))
    }

    /// Cancel the timer and stop accepting input
    pub fn unmount(&mut self) {
        self.ticker = None;
        self.mounted = false;
    }

    /// Consume the session and hand back the engine
    pub fn into_engine(mut self) -> E {
        self.unmount();
        self.engine
    }

    fn sync_timer(&mut self, now: Instant) {
        if !self.mounted || self.engine.run_state() != tui_arcade_types::RunState::Running {
            self.ticker = None;
            return;
        }

        let interval = self.engine.tick_interval();
        match self.ticker {
            Some(t) if t.interval() == interval => {}
            _ => {
                self.ticker = Some(Ticker::new(interval, now));
                self.arms += 1;
            }
        }
    }
}
