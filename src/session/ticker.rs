use std::time::{Duration, Instant};

/// Cancellable repeating deadline driving progress sampling.
///
/// Only runs while the session is playing; `stop` takes effect immediately.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// (Re)arm the ticker; the first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Returns `true` and schedules the following tick if one is due at `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
