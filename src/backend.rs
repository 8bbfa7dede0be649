//! Audio backend boundary.
//!
//! The controller issues fire-and-forget commands through `AudioBackend` and
//! never reads anything back. Failures are reported to the caller only so they
//! can be logged; local playback state stays authoritative.

mod null;
mod player;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use null::NullBackend;
pub use player::RodioBackend;
pub use types::*;

use crate::library::Track;

/// Commands understood by an audio renderer.
pub trait AudioBackend {
    /// `queued == false` replaces whatever is rendering now; `queued == true`
    /// lines the track up to follow the current one without interrupting it.
    fn play_song(&mut self, track: &Track, queued: bool) -> Result<(), BackendError>;

    /// Reposition the active render.
    fn seek(&mut self, millis: u64) -> Result<(), BackendError>;

    fn set_paused(&mut self, paused: bool) -> Result<(), BackendError>;

    /// Drop everything queued in the renderer.
    fn stop(&mut self) -> Result<(), BackendError>;
}
