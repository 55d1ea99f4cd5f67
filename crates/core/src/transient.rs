//! Self-clearing flags
//!
//! A `TransientFlag` stays active for a fixed delay after its most recent
//! trigger. Re-triggering re-arms the delay (last write wins); there is no
//! cancellation and no queue. Callers pass the current `Instant` so the
//! behavior can be tested without sleeping.

use std::time::{Duration, Instant};

/// Default lifetime of the skills graph overlay
pub const DEFAULT_GRAPH_OVERLAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientFlag {
    delay: Duration,
    clears_at: Option<Instant>,
}

impl Default for TransientFlag {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_OVERLAY)
    }
}

impl TransientFlag {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            clears_at: None,
        }
    }

    /// Raise the flag until `delay` after `now`
    pub fn trigger(&mut self, now: Instant) {
        self.clears_at = Some(now + self.delay);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.clears_at.is_some_and(|deadline| now < deadline)
    }
}
