//! Opening audio files as `rodio` sources and feeding them to a sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, Sink};

use super::types::BackendError;

fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, BackendError> {
    let file = File::open(path).map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// What the audio thread needs from a sink. Implemented by `rodio::Sink`.
pub(super) trait Output {
    /// Drop every queued source. rodio's sink also pauses itself here.
    fn clear(&self);
    fn play(&self);
    fn pause(&self);
    fn append_file(&self, path: &Path) -> Result<(), BackendError>;
    fn seek_to(&self, position: Duration) -> Result<(), BackendError>;
}

impl Output for Sink {
    fn clear(&self) {
        Sink::clear(self);
    }

    fn play(&self) {
        Sink::play(self);
    }

    fn pause(&self) {
        Sink::pause(self);
    }

    fn append_file(&self, path: &Path) -> Result<(), BackendError> {
        self.append(open_source(path)?);
        Ok(())
    }

    fn seek_to(&self, position: Duration) -> Result<(), BackendError> {
        self.try_seek(position)
            .map_err(|e| BackendError::Seek(e.to_string()))
    }
}
