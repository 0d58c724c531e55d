// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::app::config::{
    DEFAULT_PLAYBACK_RATE_INDEX, LOW_VOLUME_THRESHOLD, MAX_VOLUME, MIN_VOLUME, PLAYBACK_RATES,
};
use std::fmt;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use playback_overlay::domain::playback::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Silence.
    pub const ZERO: Self = Self(MIN_VOLUME);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN is treated as silence.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self::ZERO;
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this volume is exactly silent.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == MIN_VOLUME
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(MAX_VOLUME)
    }
}

// =============================================================================
// VolumeLevel
// =============================================================================

/// Coarse loudness class driving the volume icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeLevel {
    /// Classifies a mute flag and volume.
    ///
    /// This is the only place the level is computed; state never stores it.
    #[must_use]
    pub fn classify(muted: bool, volume: Volume) -> Self {
        if muted {
            Self::Muted
        } else if volume.value() < LOW_VOLUME_THRESHOLD {
            Self::Low
        } else {
            Self::High
        }
    }

    /// Attribute value as exposed to the rendering layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate, always one of [`PLAYBACK_RATES`].
///
/// Stored as an index so that no other value is representable.
///
/// # Example
///
/// ```
/// use playback_overlay::domain::playback::PlaybackRate;
///
/// let rate = PlaybackRate::default();
/// assert_eq!(rate.value(), 1.0);
/// assert_eq!(rate.next().value(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackRate(usize);

impl PlaybackRate {
    /// Returns the preset matching `rate`, if it is one.
    #[must_use]
    pub fn from_value(rate: f64) -> Option<Self> {
        PLAYBACK_RATES
            .iter()
            .position(|&preset| (preset - rate).abs() < 1e-9)
            .map(Self)
    }

    /// Returns the rate multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        PLAYBACK_RATES[self.0]
    }

    /// Returns the next rate, wrapping from the fastest back to the slowest.
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % PLAYBACK_RATES.len())
    }

    /// Label shown on the speed button, e.g. `1x` or `0.25x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.value())
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE_INDEX)
    }
}

// =============================================================================
// VideoIdentity
// =============================================================================

/// Host-supplied identifier namespacing a video's persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoIdentity(String);

impl VideoIdentity {
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoIdentity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

impl From<String> for VideoIdentity {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}
