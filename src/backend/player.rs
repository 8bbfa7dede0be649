use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use crate::library::Track;

use super::AudioBackend;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, BackendError};

/// `AudioBackend` backed by a `rodio` sink living on its own thread.
///
/// Commands are sent over a channel and never answered; decode and seek
/// failures are logged by the audio thread.
pub struct RodioBackend {
    tx: Sender<AudioCmd>,
    join: Option<JoinHandle<()>>,
}

impl RodioBackend {
    /// Open the default output device. Fails if no device is available.
    pub fn new() -> Result<Self, BackendError> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let join = spawn_audio_thread(rx, ready_tx)?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                tx,
                join: Some(join),
            }),
            Ok(Err(e)) => {
                let _ = join.join();
                Err(e)
            }
            Err(_) => {
                let _ = join.join();
                Err(BackendError::Disconnected)
            }
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), BackendError> {
        self.tx.send(cmd).map_err(|_| BackendError::Disconnected)
    }

    /// Stop the audio thread and wait for it to exit.
    pub fn quit(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }
}

impl AudioBackend for RodioBackend {
    fn play_song(&mut self, track: &Track, queued: bool) -> Result<(), BackendError> {
        self.send(AudioCmd::Play {
            path: track.path.clone(),
            queued,
        })
    }

    fn seek(&mut self, millis: u64) -> Result<(), BackendError> {
        self.send(AudioCmd::Seek(millis))
    }

    fn set_paused(&mut self, paused: bool) -> Result<(), BackendError> {
        self.send(AudioCmd::SetPaused(paused))
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.send(AudioCmd::Stop)
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.quit();
    }
}
