// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load(None).unwrap_or_default();
//!
//! // Keep toasts on screen a little longer
//! config.default_duration_ms = Some(8000);
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! let temp_file = temp_dir.join("settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_duration_ms, Some(8000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Auto-dismiss delay for toasts that do not request one. `0` keeps them until closed.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Default auto-dismiss duration handed to the toast manager.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    /// Interval of the auto-dismiss tick, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let millis = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(millis)
    }
}

fn config_path_in(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    }
}

/// Loads the configuration from `dir_override` or the platform config directory.
///
/// A missing file yields the defaults.
pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path_in(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path_in(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid settings file, using defaults"
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            default_duration_ms: Some(10_000),
            tick_interval_ms: Some(50),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_with_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_uses_directory_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };

        save(&config, Some(temp_dir.path())).expect("save should succeed");
        assert!(temp_dir.path().join("settings.toml").exists());
        assert_eq!(load(Some(temp_dir.path())).unwrap(), config);
    }

    #[test]
    fn default_config_uses_six_second_toasts() {
        let config = Config::default();
        assert_eq!(config.default_duration(), Duration::from_millis(6000));
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn tick_interval_is_clamped() {
        let fast = Config {
            tick_interval_ms: Some(1),
            ..Config::default()
        };
        let slow = Config {
            tick_interval_ms: Some(60_000),
            ..Config::default()
        };
        assert_eq!(fast.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
        assert_eq!(slow.tick_interval(), Duration::from_millis(MAX_TICK_INTERVAL_MS));
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"fr\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("fr"));
        assert_eq!(loaded.default_duration(), Duration::from_millis(6000));
    }
}
