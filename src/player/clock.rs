// SPDX-License-Identifier: MPL-2.0
//! Media clock capability.
//!
//! The clock is the authoritative owner of playback time. The controller only
//! issues fire-and-forget commands through this trait and reacts to the
//! notifications the clock publishes through a [`ClockNotifier`].
//!
//! [`ClockNotifier`]: super::events::ClockNotifier

/// Commands and queries the controller needs from a playable resource.
///
/// Implementations decide how to treat commands issued before the resource
/// is ready (buffer, apply later, or ignore); the controller never checks.
pub trait MediaClock {
    fn play(&mut self);

    fn pause(&mut self);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, secs: f64);

    /// Total duration in seconds. May be NaN before data is available.
    fn duration(&self) -> f64;

    /// Volume in `[0, 1]`, independent of the mute flag.
    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);
}

/// Notifications published by a media clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Playback position moved.
    TimeAdvanced,
    /// The first frame of data is available and the duration is known.
    DataReady,
    /// Playback reached the end of the media.
    Ended,
}
