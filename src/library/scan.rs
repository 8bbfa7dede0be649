use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Album, Track, TrackId};

const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

/// Lowercased extensions accepted by a scan, without leading dots.
struct Extensions(Vec<String>);

impl Extensions {
    fn from_settings(settings: &LibrarySettings) -> Self {
        Self(
            settings
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.0.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Look for a conventional cover image in the track's directory.
fn find_cover(dir: &Path) -> Option<PathBuf> {
    COVER_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

struct Tags {
    name: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<Duration>,
}

fn non_empty(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn read_tags(path: &Path) -> Tags {
    let mut tags = Tags {
        name: None,
        artist: None,
        album: None,
        duration: None,
    };

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            tags.duration = Some(tagged.properties().duration());
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                tags.name = non_empty(tag.title());
                tags.artist = non_empty(tag.artist());
                tags.album = non_empty(tag.album());
            }
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read tags");
        }
    }

    tags
}

/// Scan `dir` for audio files and build `Track` values.
///
/// Tracks are ordered by album, then by path, so an album's tracks are
/// contiguous. Ids follow that order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let extensions = Extensions::from_settings(settings);
    let max_depth = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_dotfile(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() || e.path().is_file())
        .filter(|e| extensions.accepts(e.path()))
        .map(|e| track_from_file(e.path()))
        .collect();

    tracks.sort_by_cached_key(|t| {
        (
            t.album_name().unwrap_or_default().to_lowercase(),
            t.path.clone(),
        )
    });
    for (i, track) in tracks.iter_mut().enumerate() {
        track.id = TrackId(i as u64);
    }

    tracing::info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}

/// Build a track from one file. Ids are assigned after sorting.
fn track_from_file(path: &Path) -> Track {
    let tags = read_tags(path);
    let name = tags.name.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    });
    let album = tags.album.map(|name| Album {
        name,
        cover_path: path.parent().and_then(find_cover),
    });

    Track {
        id: TrackId(0),
        name,
        duration: tags.duration,
        artist: tags.artist,
        album,
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    /// A temp directory holding empty placeholder files at `paths`.
    fn music_dir(paths: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        for rel in paths {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"placeholder").unwrap();
        }
        dir
    }

    fn names(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn extensions_are_normalized_once() {
        let settings = LibrarySettings {
            extensions: vec![" .FLAC".into(), "mp3".into(), "".into()],
            ..LibrarySettings::default()
        };
        let exts = Extensions::from_settings(&settings);
        assert_eq!(exts.0, vec!["flac", "mp3"]);
        assert!(exts.accepts(Path::new("/m/a.Flac")));
        assert!(exts.accepts(Path::new("/m/b.MP3")));
        assert!(!exts.accepts(Path::new("/m/c.ogg")));
        assert!(!exts.accepts(Path::new("/m/no_extension")));
    }

    #[test]
    fn untagged_files_fall_back_to_file_stem_in_path_order() {
        let dir = music_dir(&["b.MP3", "a.ogg", "notes.txt"]);

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(names(&tracks), vec!["a", "b"]);
        assert_eq!(tracks[0].id, TrackId(0));
        assert_eq!(tracks[1].id, TrackId(1));
        assert!(tracks.iter().all(|t| t.duration.is_none() && t.album.is_none()));
    }

    #[test]
    fn dotfiles_and_dot_directories_are_skipped_by_default() {
        let dir = music_dir(&[".hidden.mp3", ".cache/inner.mp3", "shown.mp3"]);

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(names(&tracks), vec!["shown"]);

        let all = LibrarySettings {
            include_hidden: true,
            ..LibrarySettings::default()
        };
        assert_eq!(scan(dir.path(), &all).len(), 3);
    }

    #[test]
    fn depth_limits_apply() {
        let dir = music_dir(&["top.mp3", "one/mid.mp3", "one/two/deep.mp3"]);

        let flat = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        assert_eq!(names(&scan(dir.path(), &flat)), vec!["top"]);

        let capped = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        assert_eq!(names(&scan(dir.path(), &capped)), vec!["mid", "top"]);

        assert_eq!(scan(dir.path(), &LibrarySettings::default()).len(), 3);
    }

    #[test]
    fn cover_lookup_order() {
        let dir = tempdir().unwrap();
        assert_eq!(find_cover(dir.path()), None);

        fs::write(dir.path().join("folder.png"), b"png").unwrap();
        assert_eq!(find_cover(dir.path()), Some(dir.path().join("folder.png")));

        fs::write(dir.path().join("cover.jpg"), b"jpg").unwrap();
        assert_eq!(find_cover(dir.path()), Some(dir.path().join("cover.jpg")));
    }
}
