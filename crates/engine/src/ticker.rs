//! Fixed-delay deadline timer.

use std::time::{Duration, Instant};

/// One armed timer: fires once per `interval`, measured from the last firing.
///
/// A ticker never changes its interval. Callers that need a different speed
/// drop it and arm a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    /// Arm a ticker whose first deadline is `now + interval`
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Consume a due deadline and schedule the next one from `now`.
    ///
    /// Returns false (and changes nothing) if the deadline has not passed.
    /// Missed deadlines are not replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }

    /// Time left until the deadline, zero if already due
    pub fn time_until(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
