use super::*;
use crate::library::{Album, TrackId};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

fn make_track() -> Track {
    Track {
        id: TrackId(7),
        name: "Test Title".to_string(),
        duration: Some(Duration::from_micros(1_234_567)),
        artist: Some("Test Artist".to_string()),
        album: Some(Album {
            name: "Test Album".to_string(),
            cover_path: None,
        }),
        path: PathBuf::from("/tmp/music/test.mp3"),
    }
}

fn handle_with_state() -> (MprisHandle, Arc<Mutex<SharedState>>, Receiver<()>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, notify_rx) = mpsc::channel::<()>();
    let handle = MprisHandle {
        state: state.clone(),
        notify: notify_tx,
    };
    (handle, state, notify_rx)
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let (handle, state, notify_rx) = handle_with_state();

    let track = make_track();
    handle.set_track_metadata(Some(&track));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.album.as_deref(), Some("Test Album"));
        assert_eq!(s.url.as_deref(), Some("file:///tmp/music/test.mp3"));
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }

    handle.set_track_metadata(None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.album, None);
        assert_eq!(s.url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }

    assert_eq!(notify_rx.try_iter().count(), 2);
}

#[test]
fn playback_status_maps_transport_status() {
    let (handle, state, _notify_rx) = handle_with_state();
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    for (status, expected) in [
        (TransportStatus::Disabled, "Stopped"),
        (TransportStatus::Loading, "Playing"),
        (TransportStatus::Playing, "Playing"),
        (TransportStatus::Paused, "Paused"),
        (TransportStatus::Stopped, "Stopped"),
    ] {
        handle.set_playback(status);
        assert_eq!(iface.playback_status(), expected, "{status:?}");
    }
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let (handle, state, _notify_rx) = handle_with_state();
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    handle.set_track_metadata(Some(&make_track()));
    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:album",
        "xesam:url",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }

    handle.set_track_metadata(None);
    let map = iface.metadata();
    assert!(map.contains_key("xesam:title"));
    assert!(!map.contains_key("mpris:trackid"));
    assert!(!map.contains_key("mpris:length"));
}

#[test]
fn player_methods_forward_control_commands() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    iface.play();
    iface.pause();
    iface.play_pause();
    iface.stop();
    iface.next();
    iface.previous();

    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![
            ControlCmd::Play,
            ControlCmd::Pause,
            ControlCmd::PlayPause,
            ControlCmd::Stop,
            ControlCmd::Next,
            ControlCmd::Prev,
        ]
    );
}
