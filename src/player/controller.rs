use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::backend::{AudioBackend, BackendError};
use crate::library::Track;
use crate::queue::{EntryId, InsertMode, QueueEntry, QueueStore};
use crate::transport::{Clock, Sample, TransportClock, TransportStatus};

use super::error::PlaybackError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Initial toggles, normally taken from the `[playback]` settings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    pub shuffle: bool,
    pub repeat: bool,
    /// Hand the following track to the backend as soon as a track starts.
    pub preload_next: bool,
}

fn report(op: &'static str, result: Result<(), BackendError>) {
    if let Err(e) = result {
        tracing::warn!(op, "backend command failed: {e}");
    }
}

pub struct PlaybackController {
    queue: QueueStore,
    transport: TransportClock,
    status: TransportStatus,
    shuffle: bool,
    repeat: bool,
    preload_next: bool,
    /// Entry already handed to the backend with `queued = true`.
    preloaded_next: Option<EntryId>,
    /// Last sampled elapsed time; what the views display.
    elapsed: Duration,
    backend: Box<dyn AudioBackend>,
}

impl PlaybackController {
    pub fn new(
        backend: Box<dyn AudioBackend>,
        clock: Box<dyn Clock>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            queue: QueueStore::new(),
            transport: TransportClock::new(clock),
            status: TransportStatus::Disabled,
            shuffle: options.shuffle,
            repeat: options.repeat,
            preload_next: options.preload_next,
            preloaded_next: None,
            elapsed: Duration::ZERO,
            backend,
        }
    }

    pub fn queue(&self) -> &QueueStore {
        &self.queue
    }

    pub fn status(&self) -> TransportStatus {
        self.status
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn total(&self) -> Duration {
        self.transport.total()
    }

    pub fn current(&self) -> Option<&Arc<Track>> {
        if self.status == TransportStatus::Disabled {
            return None;
        }
        self.queue.at(0)
    }

    /// (Re)load the track at the cursor and start it from zero.
    pub fn reset(&mut self) {
        self.preloaded_next = None;
        let Some(track) = self.queue.at(0).cloned() else {
            self.disable();
            return;
        };

        self.status = TransportStatus::Loading;
        report("play_song", self.backend.play_song(&track, false));
        self.transport.load(&track);
        self.elapsed = Duration::ZERO;
        self.status = TransportStatus::Playing;
        tracing::debug!(track = %track.id, position = self.queue.position(), "loaded track");

        self.preload();
    }

    fn preload(&mut self) {
        if !self.preload_next {
            return;
        }
        let Some(next) = self.queue.entry_at(1).cloned() else {
            return;
        };
        if self.preloaded_next == Some(next.id()) {
            return;
        }
        report("play_song", self.backend.play_song(next.track(), true));
        self.preloaded_next = Some(next.id());
    }

    fn disable(&mut self) {
        if self.status != TransportStatus::Disabled {
            report("stop", self.backend.stop());
            tracing::debug!("queue empty, playback disabled");
        }
        self.transport.clear();
        self.elapsed = Duration::ZERO;
        self.preloaded_next = None;
        self.status = TransportStatus::Disabled;
    }

    /// Move to the following entry when the clock reports the end.
    ///
    /// Never wraps on its own: at the tail, repeat restarts from the head and
    /// otherwise playback stops with the clock frozen at the end.
    pub fn on_track_end(&mut self) {
        if self.queue.is_empty() {
            self.disable();
            return;
        }

        let preloaded = self.preloaded_next.take();
        match self.queue.entry_at(1).cloned() {
            Some(next) => self.follow_with(next, preloaded),
            None if self.repeat => {
                if self.queue.jump_to(0).is_ok() {
                    self.reset();
                }
            }
            None => {
                if preloaded.is_some() {
                    // A preloaded entry was removed; don't let it play.
                    report("stop", self.backend.stop());
                }
                self.transport.finish();
                self.elapsed = self.transport.total();
                self.status = TransportStatus::Stopped;
                tracing::debug!("reached end of queue");
            }
        }
    }

    fn follow_with(&mut self, next: QueueEntry, preloaded: Option<EntryId>) {
        match preloaded {
            Some(id) if id == next.id() => {}
            // The queue changed under a preload; replace what the backend holds.
            Some(_) => report("play_song", self.backend.play_song(next.track(), false)),
            None => report("play_song", self.backend.play_song(next.track(), true)),
        }

        self.transport.load(next.track());
        self.elapsed = Duration::ZERO;
        self.queue.step_forward();
        self.status = TransportStatus::Playing;
        tracing::debug!(track = %next.track().id, position = self.queue.position(), "advanced");

        self.preload();
    }

    /// One sampling tick. Only a playing transport is sampled.
    pub fn tick(&mut self) {
        if self.status != TransportStatus::Playing {
            return;
        }
        match self.transport.sample() {
            Sample::Elapsed(elapsed) => self.elapsed = elapsed,
            Sample::Ended => self.on_track_end(),
        }
    }

    pub fn play_pause(&mut self) {
        match self.status {
            TransportStatus::Playing => {
                self.transport.pause();
                self.elapsed = self.transport.elapsed();
                report("set_paused", self.backend.set_paused(true));
                self.status = TransportStatus::Paused;
            }
            TransportStatus::Paused => {
                self.transport.resume();
                report("set_paused", self.backend.set_paused(false));
                self.status = TransportStatus::Playing;
            }
            TransportStatus::Stopped => self.reset(),
            // Tracks were queued without starting anything.
            TransportStatus::Disabled if !self.queue.is_empty() => self.reset(),
            TransportStatus::Disabled | TransportStatus::Loading => {}
        }
    }

    /// Manual previous/next. Wraps at either end regardless of repeat.
    pub fn skip(&mut self, direction: Direction) {
        let moved = match direction {
            Direction::Next => self.queue.advance(),
            Direction::Previous => self.queue.retreat(),
        };
        match moved {
            Ok(_) => self.reset(),
            Err(e) => {
                tracing::debug!("skip ignored: {e}");
                self.disable();
            }
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), PlaybackError> {
        self.queue.jump_to(index)?;
        self.reset();
        Ok(())
    }

    pub fn jump_to_entry(&mut self, entry: EntryId) -> Result<(), PlaybackError> {
        let index = self
            .queue
            .index_of(entry)
            .ok_or(PlaybackError::UnknownEntry)?;
        self.jump_to(index)
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Replace the queue with `tracks` and start playing at `start`.
    ///
    /// With shuffle on, the chosen track is moved to the front and the rest
    /// are randomized behind it.
    pub fn play_now(&mut self, mut tracks: Vec<Arc<Track>>, start: usize) -> Result<(), PlaybackError> {
        let mut start = start;
        if self.shuffle && start < tracks.len() {
            tracks.swap(0, start);
            tracks[1..].shuffle(&mut thread_rng());
            start = 0;
        }

        self.queue.replace(tracks, start)?;
        if self.queue.take_reload_request() {
            self.reset();
        }
        Ok(())
    }

    /// Add tracks without touching what is playing.
    pub fn enqueue(&mut self, tracks: Vec<Arc<Track>>, mode: InsertMode) {
        let count = tracks.len();
        self.queue.insert(tracks, mode);
        tracing::debug!(count, ?mode, len = self.queue.len(), "enqueued");
    }

    /// Remove a queue row. Playback continues untouched unless the queue is
    /// now empty.
    pub fn remove_from_queue(&mut self, index: usize) -> Option<Arc<Track>> {
        let removed = self.queue.remove_at(index);
        if self.queue.is_empty() {
            self.disable();
        }
        removed
    }

    /// `remove_from_queue` by stable id; `None` once the entry is gone.
    pub fn remove_entry(&mut self, entry: EntryId) -> Option<Arc<Track>> {
        let index = self.queue.index_of(entry)?;
        self.remove_from_queue(index)
    }

    /// Move the playhead to `target`. Ignored unless a track is playing or paused.
    pub fn seek(&mut self, target: Duration) {
        if !matches!(
            self.status,
            TransportStatus::Playing | TransportStatus::Paused
        ) {
            return;
        }

        self.transport.seek(target);
        self.elapsed = target;
        let millis = (target.as_secs_f64() * 1000.0).round() as u64;
        report("seek", self.backend.seek(millis));
    }

    /// Relative seek clamped to the current track.
    pub fn scrub(&mut self, delta_secs: i64) {
        let delta = Duration::from_secs(delta_secs.unsigned_abs());
        let target = if delta_secs < 0 {
            self.elapsed.saturating_sub(delta)
        } else {
            (self.elapsed + delta).min(self.total())
        };
        self.seek(target);
    }
}
