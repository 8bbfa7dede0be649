use std::path::PathBuf;
use std::time::Duration;

use crate::player::PlaybackController;
use crate::transport::TransportStatus;

/// What the play/pause button currently offers to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

impl TransportIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            TransportIcon::Play => "▶",
            TransportIcon::Pause => "⏸",
        }
    }
}

/// The always-visible transport bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactBar {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub cover: Option<PathBuf>,
    pub icon: TransportIcon,
    pub shuffle: bool,
    pub repeat: bool,
    pub status: TransportStatus,
    /// `elapsed / total`, clamped to `[0, 1]`; zero when the total is unknown.
    pub progress: f64,
    pub elapsed: Duration,
    pub total: Duration,
}

impl CompactBar {
    /// `preview` replaces the live elapsed time while a seek drag is active.
    pub fn project(player: &PlaybackController, preview: Option<Duration>) -> Self {
        let track = player.current();
        let elapsed = preview.unwrap_or_else(|| player.elapsed());
        let total = player.total();
        let progress = if total.is_zero() {
            0.0
        } else {
            (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
        };
        let icon = match player.status() {
            TransportStatus::Playing | TransportStatus::Loading => TransportIcon::Pause,
            _ => TransportIcon::Play,
        };

        Self {
            title: track.map(|t| t.name.clone()),
            artist: track.and_then(|t| t.artist.clone()),
            album: track.and_then(|t| t.album_name().map(str::to_string)),
            cover: track.and_then(|t| t.cover_path().cloned()),
            icon,
            shuffle: player.shuffle(),
            repeat: player.repeat(),
            status: player.status(),
            progress,
            elapsed,
            total,
        }
    }
}
