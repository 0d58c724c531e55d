// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Autoplay and initial volume
//! - `[thumbnails]` - Scrub-preview asset root
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PLAYBACK_OVERLAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.playback.autoplay = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings applied when a controller is attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing as soon as the controller attaches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Initial volume (0.0 to 1.0) commanded on attach.
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: Some(false),
            volume: default_volume(),
        }
    }
}

/// Scrub-preview thumbnail settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailConfig {
    /// Directory containing `preview{n}.jpg` files.
    #[serde(
        default = "default_asset_root",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_root: Option<String>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Overlay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
}

impl Config {
    /// Returns the thumbnail root, falling back to the built-in default.
    #[must_use]
    pub fn preview_asset_root(&self) -> PathBuf {
        PathBuf::from(
            self.thumbnails
                .asset_root
                .as_deref()
                .unwrap_or(DEFAULT_PREVIEW_ASSET_ROOT),
        )
    }

    /// Returns the configured initial volume clamped to `[0, 1]`.
    #[must_use]
    pub fn initial_volume(&self) -> f64 {
        self.playback
            .volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_volume() -> Option<f64> {
    Some(DEFAULT_VOLUME)
}

fn default_asset_root() -> Option<String> {
    Some(DEFAULT_PREVIEW_ASSET_ROOT.to_string())
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns defaults with a warning key when the file exists but cannot be
/// read or parsed.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(Error::Io(_)) => (
            Config::default(),
            Some("notification-config-read-error".to_string()),
        ),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    match get_default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "config directory could not be determined".to_string(),
        )),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
