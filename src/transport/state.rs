use std::time::Duration;

use crate::library::Track;

use super::clock::Clock;

/// Lifecycle of the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TransportStatus {
    /// Nothing loaded; playback controls are inert.
    #[default]
    Disabled,
    Loading,
    Playing,
    Paused,
    /// The queue ran out with repeat off; the clock is frozen at the end.
    Stopped,
}

/// Result of one sampling tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sample {
    Elapsed(Duration),
    /// Reported once per `load`, the first time elapsed reaches the total.
    Ended,
}

/// Anchor-based elapsed-time simulation for the current track.
///
/// The anchor is kept as a pair (clock instant, position at that instant), so
/// `elapsed = offset + (now - anchor)`. Seeking re-anchors at the target;
/// pausing records the pause instant and resuming shifts the anchor forward by
/// the paused span so that time spent paused never counts as elapsed.
pub struct TransportClock {
    clock: Box<dyn Clock>,
    anchor: Duration,
    offset: Duration,
    total: Duration,
    paused_at: Option<Duration>,
    end_reported: bool,
}

impl TransportClock {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            clock,
            anchor: now,
            offset: Duration::ZERO,
            total: Duration::ZERO,
            paused_at: None,
            end_reported: false,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Start timing `track` from zero. A missing duration counts as zero,
    /// which makes the next sample report the end.
    pub fn load(&mut self, track: &Track) {
        self.anchor = self.clock.now();
        self.offset = Duration::ZERO;
        self.total = track.duration.unwrap_or_default();
        self.paused_at = None;
        self.end_reported = false;
    }

    /// Forget the loaded track (queue emptied).
    pub fn clear(&mut self) {
        self.anchor = self.clock.now();
        self.offset = Duration::ZERO;
        self.total = Duration::ZERO;
        self.paused_at = None;
        self.end_reported = false;
    }

    pub fn elapsed(&self) -> Duration {
        let now = self.paused_at.unwrap_or_else(|| self.clock.now());
        self.offset + now.saturating_sub(self.anchor)
    }

    pub fn sample(&mut self) -> Sample {
        let elapsed = self.elapsed();
        if elapsed < self.total {
            return Sample::Elapsed(elapsed);
        }
        if self.end_reported {
            Sample::Elapsed(self.total)
        } else {
            self.end_reported = true;
            Sample::Ended
        }
    }

    /// Re-anchor so that the current position is `target`.
    pub fn seek(&mut self, target: Duration) {
        let now = self.clock.now();
        self.anchor = now;
        self.offset = target;
        if self.paused_at.is_some() {
            self.paused_at = Some(now);
        }
        self.end_reported = false;
    }

    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(self.clock.now());
        }
    }

    pub fn resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            let paused_for = self.clock.now().saturating_sub(paused_at);
            self.anchor += paused_for;
        }
    }

    /// Freeze the clock at the end of the current track.
    pub fn finish(&mut self) {
        let now = self.clock.now();
        self.anchor = now;
        self.offset = self.total;
        self.paused_at = Some(now);
        self.end_reported = true;
    }
}
