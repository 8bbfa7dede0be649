//! Test double that records every command it receives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::library::{Track, TrackId};

use super::AudioBackend;
use super::types::BackendError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    PlaySong { id: TrackId, queued: bool },
    Seek(u64),
    SetPaused(bool),
    Stop,
}

/// Cloneable handle; every clone shares the same call log.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    calls: Rc<RefCell<Vec<BackendCall>>>,
    failing: Rc<Cell<bool>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Make every subsequent command fail after being recorded.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn record(&self, call: BackendCall) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            Err(BackendError::Disconnected)
        } else {
            Ok(())
        }
    }
}

impl AudioBackend for RecordingBackend {
    fn play_song(&mut self, track: &Track, queued: bool) -> Result<(), BackendError> {
        self.record(BackendCall::PlaySong {
            id: track.id,
            queued,
        })
    }

    fn seek(&mut self, millis: u64) -> Result<(), BackendError> {
        self.record(BackendCall::Seek(millis))
    }

    fn set_paused(&mut self, paused: bool) -> Result<(), BackendError> {
        self.record(BackendCall::SetPaused(paused))
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.record(BackendCall::Stop)
    }
}
