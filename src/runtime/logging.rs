use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

/// Install the global `tracing` subscriber, writing to the configured log
/// file. The terminal belongs to the UI, so when no file can be opened events
/// are simply dropped.
///
/// `CADENZA_LOG` overrides `logging.level`. Returns the log file in use.
pub fn init_logging(settings: &LoggingSettings) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_env("CADENZA_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = settings.file.clone().or_else(default_log_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
