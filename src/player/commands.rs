use std::sync::Arc;
use std::time::Duration;

use crate::library::Track;
use crate::queue::EntryId;

use super::controller::PlaybackController;
use super::error::PlaybackError;

/// The commands views are allowed to issue.
///
/// Passed explicitly to whatever handles input so views never reach for the
/// controller on their own.
pub trait PlayerCommands {
    fn jump_to(&mut self, index: usize) -> Result<(), PlaybackError>;
    fn jump_to_entry(&mut self, entry: EntryId) -> Result<(), PlaybackError>;
    fn remove_entry(&mut self, entry: EntryId) -> Option<Arc<Track>>;
    fn toggle_shuffle(&mut self) -> bool;
    fn toggle_repeat(&mut self) -> bool;
    fn seek(&mut self, target: Duration);
    /// Length of the current track; zero when nothing is loaded.
    fn total(&self) -> Duration;
}

impl PlayerCommands for PlaybackController {
    fn jump_to(&mut self, index: usize) -> Result<(), PlaybackError> {
        PlaybackController::jump_to(self, index)
    }

    fn jump_to_entry(&mut self, entry: EntryId) -> Result<(), PlaybackError> {
        PlaybackController::jump_to_entry(self, entry)
    }

    fn remove_entry(&mut self, entry: EntryId) -> Option<Arc<Track>> {
        PlaybackController::remove_entry(self, entry)
    }

    fn toggle_shuffle(&mut self) -> bool {
        PlaybackController::toggle_shuffle(self)
    }

    fn toggle_repeat(&mut self) -> bool {
        PlaybackController::toggle_repeat(self)
    }

    fn seek(&mut self, target: Duration) {
        PlaybackController::seek(self, target)
    }

    fn total(&self) -> Duration {
        PlaybackController::total(self)
    }
}
