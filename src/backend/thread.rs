use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use super::sink::Output;
use super::types::{AudioCmd, BackendError};

/// Spawn the thread that owns the output stream and sink.
///
/// `ready` receives `Ok(())` once the output device is open, or the reason it
/// could not be opened; in the latter case the thread exits immediately.
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    ready: Sender<Result<(), BackendError>>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("cadenza-audio".into())
        .spawn(move || {
            let mut stream = match OutputStreamBuilder::open_default_stream() {
                Ok(stream) => stream,
                Err(e) => {
                    let _ = ready.send(Err(BackendError::NoOutputDevice(e.to_string())));
                    return;
                }
            };
            // rodio logs to stderr when the stream is dropped, which would
            // scribble over the terminal UI.
            stream.log_on_drop(false);

            let sink = Sink::connect_new(stream.mixer());
            let _ = ready.send(Ok(()));

            while let Ok(cmd) = rx.recv() {
                if !apply(&sink, cmd) {
                    break;
                }
            }

            sink.stop();
            tracing::debug!("audio thread exiting");
        })
}

/// Run one command against `out`. Returns `false` on `Quit`.
fn apply(out: &impl Output, cmd: AudioCmd) -> bool {
    match cmd {
        AudioCmd::Play { path, queued } => {
            if !queued {
                // Resume right away: if this file fails, later queued tracks
                // must still be audible.
                out.clear();
                out.play();
            }
            match out.append_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), queued, "appended source"),
                Err(e) => tracing::warn!("{e}"),
            }
        }
        AudioCmd::Seek(millis) => {
            if let Err(e) = out.seek_to(Duration::from_millis(millis)) {
                tracing::warn!("{e}");
            }
        }
        AudioCmd::SetPaused(true) => out.pause(),
        AudioCmd::SetPaused(false) => out.play(),
        AudioCmd::Stop => out.clear(),
        AudioCmd::Quit => return false,
    }
    true
}
