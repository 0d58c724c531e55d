// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Playback volume bounds and level classification
//! - **Playback Rate**: The fixed rate cycle
//! - **Thumbnails**: Scrub-preview addressing
//! - **Resume**: Persisted resume position keys

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume adopted when unmuting a clock that reports no audible volume.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = 1.0;

/// Volumes strictly below this value are classified as "low".
pub const LOW_VOLUME_THRESHOLD: f64 = 0.5;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Ordered playback rates reachable through the speed button.
pub const PLAYBACK_RATES: [f64; 5] = [0.25, 0.5, 1.0, 1.5, 2.0];

/// Index of the normal (1x) rate within [`PLAYBACK_RATES`].
pub const DEFAULT_PLAYBACK_RATE_INDEX: usize = 2;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Seconds of content covered by one scrub-preview thumbnail.
pub const PREVIEW_INTERVAL_SECS: f64 = 10.0;

/// Smallest valid thumbnail index (thumbnails are 1-indexed).
pub const MIN_PREVIEW_INDEX: u32 = 1;

/// Default directory holding `preview{n}.jpg` files.
pub const DEFAULT_PREVIEW_ASSET_ROOT: &str = "assets/previewImgs";

// ==========================================================================
// Resume Defaults
// ==========================================================================

/// Prefix of the key-value store entry holding a video's resume offset.
pub const RESUME_KEY_PREFIX: &str = "resume:";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(LOW_VOLUME_THRESHOLD > MIN_VOLUME);
    assert!(LOW_VOLUME_THRESHOLD < MAX_VOLUME);

    assert!(DEFAULT_PLAYBACK_RATE_INDEX < PLAYBACK_RATES.len());

    assert!(PREVIEW_INTERVAL_SECS > 0.0);
    assert!(MIN_PREVIEW_INDEX >= 1);
};
