//! Frame throttling keyed on snapshot fingerprints.

use std::time::{Duration, Instant};

/// Decides when a frame is worth redrawing.
///
/// A frame is drawn when the observable state changed (different fingerprint),
/// after [`RenderThrottle::invalidate`], or as a heartbeat once every
/// `heartbeat` while nothing changes.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat: Duration,
    last_render: Option<Instant>,
    last_fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(heartbeat: Duration) -> Self {
        Self {
            heartbeat,
            last_render: None,
            last_fingerprint: 0,
        }
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.last_render = None;
    }

    pub fn should_render(&mut self, now: Instant, fingerprint: u64) -> bool {
        let due = match self.last_render {
            None => true,
            Some(_) if fingerprint != self.last_fingerprint => true,
            Some(at) => now.saturating_duration_since(at) >= self.heartbeat,
        };
        if due {
            self.last_render = Some(now);
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
