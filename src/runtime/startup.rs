use crate::backend::{AudioBackend, NullBackend, RodioBackend};
use crate::config;
use crate::player::{ControllerOptions, PlaybackController};
use crate::transport::SystemClock;

pub fn controller_options(playback: &config::PlaybackSettings) -> ControllerOptions {
    ControllerOptions {
        shuffle: playback.shuffle,
        repeat: playback.repeat,
        preload_next: playback.preload_next,
    }
}

/// Build the controller on the default output device, or on a silent backend
/// when there is none.
pub fn build_controller(settings: &config::Settings) -> PlaybackController {
    let backend: Box<dyn AudioBackend> = match RodioBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            tracing::warn!("{e}; continuing without audio output");
            Box::new(NullBackend)
        }
    };

    PlaybackController::new(
        backend,
        Box::new(SystemClock::new()),
        controller_options(&settings.playback),
    )
}
