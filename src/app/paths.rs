// SPDX-License-Identifier: MPL-2.0
//! Where the preferences file and the resume store live.
//!
//! # Resolution
//!
//! First match wins:
//! 1. **Explicit override** - parameter to `_with_override()` functions (CLI, tests)
//! 2. **Environment variables** (`PLAYBACK_OVERLAY_DATA_DIR`, `PLAYBACK_OVERLAY_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Directory name under the platform base directories.
const APP_NAME: &str = "PlaybackOverlay";

/// Overrides the resume store directory.
pub const ENV_DATA_DIR: &str = "PLAYBACK_OVERLAY_DATA_DIR";

/// Overrides the directory holding `settings.toml`.
pub const ENV_CONFIG_DIR: &str = "PLAYBACK_OVERLAY_CONFIG_DIR";

/// Resume store directory.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Resume store directory, preferring `override_path` when given.
///
/// `None` only when the platform exposes no data directory.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_DATA_DIR, dirs::data_dir)
}

/// Preferences directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Preferences directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_CONFIG_DIR, dirs::config_dir)
}

fn resolve(
    override_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_takes_priority() {
        let custom = PathBuf::from("/tmp/overlay-test-data");
        assert_eq!(
            get_app_data_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn config_override_takes_priority() {
        let custom = PathBuf::from("/tmp/overlay-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn platform_default_appends_app_name() {
        let resolved = resolve(None, "PLAYBACK_OVERLAY_UNSET_FOR_TEST", || {
            Some(PathBuf::from("/base"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/base").join(APP_NAME)));
    }

    #[test]
    fn missing_platform_dir_yields_none() {
        let resolved = resolve(None, "PLAYBACK_OVERLAY_UNSET_FOR_TEST", || None);
        assert!(resolved.is_none());
    }
}
