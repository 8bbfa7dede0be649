use crate::library::Track;

use super::AudioBackend;
use super::types::BackendError;

/// Silent backend used when no output device can be opened.
///
/// The transport still runs off the wall clock, so the UI behaves as if audio
/// were playing.
#[derive(Debug, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play_song(&mut self, track: &Track, queued: bool) -> Result<(), BackendError> {
        tracing::trace!(track = %track.id, queued, "null backend: play");
        Ok(())
    }

    fn seek(&mut self, _millis: u64) -> Result<(), BackendError> {
        Ok(())
    }

    fn set_paused(&mut self, _paused: bool) -> Result<(), BackendError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}
