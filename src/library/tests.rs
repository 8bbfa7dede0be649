use super::*;
use std::path::PathBuf;
use std::time::Duration;

fn t(id: u64, name: &str, album: Option<&str>) -> Track {
    Track {
        id: TrackId(id),
        name: name.into(),
        duration: Some(Duration::from_secs(100)),
        artist: None,
        album: album.map(|a| Album {
            name: a.into(),
            cover_path: None,
        }),
        path: PathBuf::from(format!("/music/{name}.mp3")),
    }
}

#[test]
fn display_prefers_artist_dash_name() {
    let mut track = t(0, "Song", None);
    assert_eq!(track.display(), "Song");
    track.artist = Some("  Artist  ".into());
    assert_eq!(track.display(), "Artist - Song");
    track.artist = Some("   ".into());
    assert_eq!(track.display(), "Song");
}

#[test]
fn album_of_returns_album_tracks_and_start() {
    let lib = Library::new(vec![
        t(0, "a1", Some("A")),
        t(1, "a2", Some("A")),
        t(2, "b1", Some("B")),
        t(3, "a3", Some("A")),
    ]);

    let (songs, start) = lib.album_of(3).unwrap();
    let names: Vec<&str> = songs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a1", "a2", "a3"]);
    assert_eq!(start, 2);
}

#[test]
fn album_of_single_track_without_album() {
    let lib = Library::new(vec![t(0, "loose", None), t(1, "x", Some("X"))]);
    let (songs, start) = lib.album_of(0).unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(start, 0);
    assert!(lib.album_of(9).is_none());
}

#[test]
fn empty_library_has_nothing_to_select() {
    let library = Library::new(Vec::new());
    assert!(library.is_empty());
    assert_eq!(library.len(), 0);
    assert!(library.get(0).is_none());
    assert!(library.album_of(0).is_none());

    assert!(!Library::new(vec![t(0, "only", None)]).is_empty());
}
