use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `CADENZA__`) over an
/// optional config file over struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CADENZA")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.sample_interval_ms == 0 {
            return Err("playback.sample_interval_ms must be >= 1".to_string());
        }
        if self.library.extensions.is_empty() {
            return Err("library.extensions must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `CADENZA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CADENZA_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/cadenza/config.toml`, or `~/.config/cadenza/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("cadenza").join("config.toml"))
}

/// `$XDG_STATE_HOME/cadenza/cadenza.log`, or `~/.local/state/cadenza/cadenza.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("cadenza").join("cadenza.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
