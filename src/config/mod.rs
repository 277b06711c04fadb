// SPDX-License-Identifier: MPL-2.0
//! This module handles the helper's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use herald::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::domain::notification::Placement;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "herald";

/// Auto-hide delay applied to a plain toast when the request does not
/// carry one.
pub const DEFAULT_TOAST_HIDE_DELAY_MS: u64 = 1000;

/// Auto-hide delay applied to confirm toasts when the request does not
/// carry one. Prompt toasts never auto-hide.
pub const DEFAULT_CONFIRM_TOAST_HIDE_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub toast_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub confirm_toast_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub placement: Option<Placement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            toast_hide_delay_ms: Some(DEFAULT_TOAST_HIDE_DELAY_MS),
            confirm_toast_hide_delay_ms: Some(DEFAULT_CONFIRM_TOAST_HIDE_DELAY_MS),
            placement: Some(Placement::BottomRight),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            toast_hide_delay_ms: Some(2500),
            confirm_toast_hide_delay_ms: Some(8000),
            placement: Some(Placement::TopCenter),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.toast_hide_delay_ms, config.toast_hide_delay_ms);
        assert_eq!(
            loaded.confirm_toast_hide_delay_ms,
            config.confirm_toast_hide_delay_ms
        );
        assert_eq!(loaded.placement, config.placement);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.toast_hide_delay_ms, Some(DEFAULT_TOAST_HIDE_DELAY_MS));
    }

    #[test]
    fn default_delays_match_canonical_values() {
        let config = Config::default();
        assert_eq!(config.toast_hide_delay_ms, Some(1000));
        assert_eq!(config.confirm_toast_hide_delay_ms, Some(5000));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let config: Config = toml::from_str("language = \"en-US\"").expect("parse");
        assert_eq!(config.language, Some("en-US".to_string()));
        assert_eq!(config.toast_hide_delay_ms, None);
        assert_eq!(config.placement, None);
    }
}
