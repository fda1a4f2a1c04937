//! Application-level configuration loading, including the daily task submission windows.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TEAMHUB_CONFIG_PATH";
/// Last local hour (exclusive) at which tomorrow's task list may still be submitted.
const DEFAULT_OTT_CUTOFF_HOUR: u8 = 20;
/// First local hour (inclusive) at which the focus task may be picked.
const DEFAULT_MIT_OPEN_HOUR: u8 = 6;
/// Local hour (exclusive) at which the focus task window closes.
const DEFAULT_MIT_CLOSE_HOUR: u8 = 22;
/// Author recorded on announcements and audit entries when no actor is supplied.
const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Tomorrow's task list must be in before this local hour.
    pub ott_cutoff_hour: u8,
    /// The focus task window opens at this local hour.
    pub mit_open_hour: u8,
    /// The focus task window closes at this local hour.
    pub mit_close_hour: u8,
    /// Offset applied to UTC when deciding what "today" means.
    pub utc_offset_hours: i8,
    /// Fallback author name for unattributed writes.
    pub default_author: String,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let mut app_config: Self = raw.into();
                    if app_config.mit_open_hour >= app_config.mit_close_hour {
                        warn!(
                            open = app_config.mit_open_hour,
                            close = app_config.mit_close_hour,
                            "focus task window is inverted; using default hours"
                        );
                        app_config.mit_open_hour = DEFAULT_MIT_OPEN_HOUR;
                        app_config.mit_close_hour = DEFAULT_MIT_CLOSE_HOUR;
                    }
                    info!(
                        path = %path.display(),
                        ott_cutoff_hour = app_config.ott_cutoff_hour,
                        mit_open_hour = app_config.mit_open_hour,
                        mit_close_hour = app_config.mit_close_hour,
                        utc_offset_hours = app_config.utc_offset_hours,
                        "loaded configuration from disk"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ott_cutoff_hour: DEFAULT_OTT_CUTOFF_HOUR,
            mit_open_hour: DEFAULT_MIT_OPEN_HOUR,
            mit_close_hour: DEFAULT_MIT_CLOSE_HOUR,
            utc_offset_hours: 0,
            default_author: DEFAULT_AUTHOR.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
///
/// Every field is optional so a partial file only overrides what it names.
struct RawConfig {
    ott_cutoff_hour: Option<u8>,
    mit_open_hour: Option<u8>,
    mit_close_hour: Option<u8>,
    utc_offset_hours: Option<i8>,
    default_author: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            ott_cutoff_hour: value.ott_cutoff_hour.unwrap_or(defaults.ott_cutoff_hour),
            mit_open_hour: value.mit_open_hour.unwrap_or(defaults.mit_open_hour),
            mit_close_hour: value.mit_close_hour.unwrap_or(defaults.mit_close_hour),
            utc_offset_hours: value.utc_offset_hours.unwrap_or(defaults.utc_offset_hours),
            default_author: value.default_author.unwrap_or(defaults.default_author),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
