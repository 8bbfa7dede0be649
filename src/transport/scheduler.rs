use std::time::Duration;

/// Fixed-period sampling schedule driven by the event loop.
///
/// Missed periods are coalesced into a single due tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Duration,
}

impl Ticker {
    pub fn new(period: Duration, now: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns `true` when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    /// How long the caller may block before the next tick is due.
    pub fn until_next(&self, now: Duration) -> Duration {
        self.next_due.saturating_sub(now)
    }
}
