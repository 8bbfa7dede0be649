//! MPRIS2 service so desktop media keys and `playerctl` can drive playback.
//!
//! Method calls arrive on the zbus thread and are forwarded to the event loop
//! as `ControlCmd`s; the loop pushes status and metadata back through
//! `MprisHandle`.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_io::{Timer, block_on};
use zbus::{Connection, interface, object_server::InterfaceRef};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::library::Track;
use crate::transport::TransportStatus;

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const BUS_NAME: &str = "org.mpris.MediaPlayer2.cadenza";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: TransportStatus,
    title: Option<String>,
    artist: Vec<String>,
    album: Option<String>,
    url: Option<String>,
    length_micros: Option<i64>,
    track_id: Option<OwnedObjectPath>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
    /// Wakes the service thread so it emits `PropertiesChanged`.
    notify: Sender<()>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: TransportStatus) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
        let _ = self.notify.send(());
    }

    pub fn set_track_metadata(&self, track: Option<&Track>) {
        if let Ok(mut s) = self.state.lock() {
            s.title = track.map(|t| t.name.clone());
            s.artist = track
                .and_then(|t| t.artist.clone())
                .into_iter()
                .collect();
            s.album = track.and_then(|t| t.album_name().map(str::to_string));
            s.url = track.map(|t| format!("file://{}", t.path.display()));
            s.length_micros = track
                .and_then(|t| t.duration)
                .map(|d| d.as_micros().min(i64::MAX as u128) as i64);
            s.track_id = track.and_then(|t| {
                ObjectPath::try_from(format!("{OBJECT_PATH}/track/{}", t.id))
                    .ok()
                    .map(OwnedObjectPath::from)
            });
        }
        let _ = self.notify.send(());
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No window to raise.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "cadenza"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec!["file".to_string()]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

fn owned(value: Value<'_>) -> Option<OwnedValue> {
    OwnedValue::try_from(value).ok()
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            TransportStatus::Playing | TransportStatus::Loading => "Playing",
            TransportStatus::Paused => "Paused",
            TransportStatus::Stopped | TransportStatus::Disabled => "Stopped",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        let mut put = |key: &str, value: Option<OwnedValue>| {
            if let Some(v) = value {
                map.insert(key.to_string(), v);
            }
        };

        put(
            "mpris:trackid",
            s.track_id
                .as_ref()
                .and_then(|p| owned(Value::from((**p).clone()))),
        );
        put(
            "xesam:title",
            owned(Value::from(s.title.clone().unwrap_or_default())),
        );
        if !s.artist.is_empty() {
            put("xesam:artist", owned(Value::from(s.artist.clone())));
        }
        put("xesam:album", s.album.clone().and_then(|a| owned(Value::from(a))));
        put("xesam:url", s.url.clone().and_then(|u| owned(Value::from(u))));
        put("mpris:length", s.length_micros.and_then(|l| owned(Value::from(l))));
        map
    }
}

async fn emit_changes(player: &InterfaceRef<PlayerIface>) -> zbus::Result<()> {
    let iface = player.get().await;
    let emitter = player.signal_emitter();
    iface.playback_status_changed(emitter).await?;
    iface.metadata_changed(emitter).await
}

async fn serve(
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
    notify: Receiver<()>,
) -> zbus::Result<()> {
    let connection = Connection::session().await?;
    connection.request_name(BUS_NAME).await?;

    let object_server = connection.object_server();
    object_server.at(OBJECT_PATH, RootIface { tx: tx.clone() }).await?;
    object_server
        .at(OBJECT_PATH, PlayerIface { tx, state })
        .await?;
    let player = object_server
        .interface::<_, PlayerIface>(OBJECT_PATH)
        .await?;
    tracing::info!(name = BUS_NAME, "MPRIS service registered");

    loop {
        let mut changed = false;
        loop {
            match notify.try_recv() {
                Ok(()) => changed = true,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
        if changed {
            if let Err(e) = emit_changes(&player).await {
                tracing::debug!("MPRIS: failed to emit property change: {e}");
            }
        }
        Timer::after(Duration::from_millis(200)).await;
    }
}

/// Start the MPRIS service on its own thread. Failing to reach the session bus
/// is logged and otherwise ignored; the handle keeps working either way.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, notify_rx) = mpsc::channel::<()>();

    let state_for_thread = state.clone();
    let spawned = std::thread::Builder::new()
        .name("cadenza-mpris".into())
        .spawn(move || {
            if let Err(e) = block_on(serve(tx, state_for_thread, notify_rx)) {
                tracing::warn!("MPRIS unavailable: {e}");
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("failed to start MPRIS thread: {e}");
    }

    MprisHandle {
        state,
        notify: notify_tx,
    }
}

#[cfg(test)]
mod tests;
