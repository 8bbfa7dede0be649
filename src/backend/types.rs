//! Backend command and error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug)]
pub enum AudioCmd {
    /// Decode `path` and either replace the current render or queue it behind.
    Play { path: PathBuf, queued: bool },
    /// Seek the active source to the given offset in milliseconds.
    Seek(u64),
    /// Pause or resume the sink.
    SetPaused(bool),
    /// Clear every queued source.
    Stop,
    /// Shut the audio thread down.
    Quit,
}

#[derive(Debug, Error)]
pub enum BackendError {
    /// The audio thread is gone; the command was not delivered.
    #[error("audio thread is not running")]
    Disconnected,

    #[error("no audio output device: {0}")]
    NoOutputDevice(String),

    #[error("failed to start audio thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("seek failed: {0}")]
    Seek(String),
}
