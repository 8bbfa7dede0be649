use thiserror::Error;

use crate::queue::QueueError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// The entry was removed before the command reached the controller.
    #[error("queue entry no longer exists")]
    UnknownEntry,
}
