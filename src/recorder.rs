//! Journals what happens to a mounted [`Session`].
//!
//! Every dispatch and every poll is followed by draining the engine's event
//! slot, so an event produced by input is never overwritten by a tick in the
//! same loop iteration.

use std::time::Instant;

use crate::engine::{Engine, Session};
use crate::journal::{Journal, JournalEvent};
use crate::types::RunState;

#[derive(Debug, Clone, Copy)]
pub struct SessionRecorder {
    last_state: RunState,
}

impl SessionRecorder {
    pub fn new<E: Engine>(session: &Session<E>) -> Self {
        Self {
            last_state: session.engine().run_state(),
        }
    }

    /// Journal the intent, apply it, then journal what it caused.
    pub fn dispatch<E>(
        &mut self,
        session: &mut Session<E>,
        journal: &mut Journal,
        intent: E::Intent,
        now: Instant,
    ) -> bool
    where
        E: Engine,
        E::Event: Into<JournalEvent>,
    {
        journal.record(JournalEvent::intent(E::intent_name(&intent)));
        let changed = session.dispatch(intent, now);
        if changed && E::is_reset(&intent) {
            journal.record(JournalEvent::Reset {
                high_score: session.engine().high_score(),
            });
        }
        self.observe(session, journal);
        changed
    }

    /// Fire a due tick and journal what it caused.
    pub fn poll<E>(&mut self, session: &mut Session<E>, journal: &mut Journal, now: Instant) -> bool
    where
        E: Engine,
        E::Event: Into<JournalEvent>,
    {
        let ticked = session.poll(now);
        self.observe(session, journal);
        ticked
    }

    /// Journal the end of the session and hand back the engine.
    pub fn finish<E: Engine>(self, session: Session<E>, journal: &mut Journal) -> E {
        let engine = session.into_engine();
        journal.record(JournalEvent::SessionEnd {
            score: engine.score(),
            high_score: engine.high_score(),
        });
        engine
    }

    fn observe<E>(&mut self, session: &mut Session<E>, journal: &mut Journal)
    where
        E: Engine,
        E::Event: Into<JournalEvent>,
    {
        while let Some(ev) = session.take_event() {
            journal.record(ev);
        }

        let state = session.engine().run_state();
        if state == RunState::GameOver && self.last_state != RunState::GameOver {
            let engine = session.engine();
            journal.record(JournalEvent::GameOver {
                score: engine.score(),
                high_score: engine.high_score(),
            });
        }
        self.last_state = state;
    }
}
