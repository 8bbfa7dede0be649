use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Identifier the library assigns to each scanned track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    /// Cover image next to the audio files, if one was found.
    pub cover_path: Option<PathBuf>,
}

/// An immutable track record.
///
/// The queue shares these as `Arc<Track>` snapshots: once enqueued, the
/// displayed metadata never changes even if the library is rescanned.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    /// `None` when the file could not be probed; the transport treats it as zero.
    pub duration: Option<Duration>,
    pub artist: Option<String>,
    pub album: Option<Album>,
    pub path: PathBuf,
}

impl Track {
    /// "Artist - Name", or just the name when there is no artist.
    pub fn display(&self) -> String {
        match self.artist.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => format!("{} - {}", a, self.name),
            _ => self.name.clone(),
        }
    }

    pub fn album_name(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.name.as_str())
    }

    pub fn cover_path(&self) -> Option<&PathBuf> {
        self.album.as_ref().and_then(|a| a.cover_path.as_ref())
    }
}

/// The scanned library, in display order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Arc<Track>>,
}

impl Library {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Track>> {
        self.tracks.get(index)
    }

    /// All tracks sharing the album of the track at `index`, plus the position
    /// of that track within the returned list.
    ///
    /// Tracks without an album form a single-track "album".
    pub fn album_of(&self, index: usize) -> Option<(Vec<Arc<Track>>, usize)> {
        let selected = self.tracks.get(index)?;
        let Some(album) = selected.album_name() else {
            return Some((vec![selected.clone()], 0));
        };

        let songs: Vec<Arc<Track>> = self
            .tracks
            .iter()
            .filter(|t| t.album_name() == Some(album))
            .cloned()
            .collect();
        let start = songs
            .iter()
            .position(|t| t.id == selected.id)
            .unwrap_or(0);
        Some((songs, start))
    }
}
