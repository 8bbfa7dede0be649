use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Whether the queue restarts from the top after the last track.
    pub repeat: bool,
    /// How often the transport clock is sampled (milliseconds).
    pub sample_interval_ms: u64,
    /// Hand the next track to the audio backend as soon as the current one
    /// starts, instead of when it ends.
    pub preload_next: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat: false,
            sample_interval_ms: 250,
            preload_next: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which time fields the transport bar shows, and in what order.
    ///
    /// Example: ["elapsed", "total", "remaining"]
    pub time_fields: Vec<TimeField>,

    /// Separator used to join `time_fields`.
    pub time_separator: String,

    /// Whether the queue panel is open at startup.
    pub show_queue_panel: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ cadenza ~ ".to_string(),
            time_fields: vec![TimeField::Elapsed, TimeField::Total],
            time_separator: " / ".to_string(),
            show_queue_panel: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeField {
    Elapsed,
    Total,
    Remaining,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { scrub_seconds: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `cadenza=debug`.
    /// `CADENZA_LOG` takes precedence when set.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/cadenza/cadenza.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
