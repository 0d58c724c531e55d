// SPDX-License-Identifier: MPL-2.0
//! In-process media clock and fullscreen surface.
//!
//! Used by the demo binary and by tests that need a clock which actually
//! advances and publishes notifications.

use super::clock::{ClockEvent, MediaClock};
use super::events::ClockNotifier;
use super::fullscreen::FullscreenSurface;
use crate::error::FullscreenError;

/// Deterministic clock advanced by explicit [`tick`](Self::tick) calls.
#[derive(Debug)]
pub struct SimulatedClock {
    notifier: ClockNotifier,
    duration_secs: f64,
    loaded: bool,
    playing: bool,
    current_secs: f64,
    volume: f64,
    muted: bool,
    rate: f64,
}

impl SimulatedClock {
    /// Creates an unloaded clock. The duration reads as NaN until [`load`](Self::load).
    #[must_use]
    pub fn new(duration_secs: f64, notifier: ClockNotifier) -> Self {
        Self {
            notifier,
            duration_secs: duration_secs.max(0.0),
            loaded: false,
            playing: false,
            current_secs: 0.0,
            volume: 1.0,
            muted: false,
            rate: 1.0,
        }
    }

    /// Makes data available and publishes `DataReady`.
    pub fn load(&mut self) {
        self.loaded = true;
        self.notifier.notify(ClockEvent::DataReady);
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advances playback by `elapsed_secs` of wall time, scaled by the rate.
    ///
    /// Publishes `TimeAdvanced`, then `Ended` (and pauses) on reaching the end.
    /// Does nothing while paused or unloaded.
    pub fn tick(&mut self, elapsed_secs: f64) {
        if !(self.loaded && self.playing) {
            return;
        }
        self.current_secs = (self.current_secs + elapsed_secs * self.rate).min(self.duration_secs);
        self.notifier.notify(ClockEvent::TimeAdvanced);

        if self.current_secs >= self.duration_secs {
            self.playing = false;
            self.notifier.notify(ClockEvent::Ended);
        }
    }
}

impl MediaClock for SimulatedClock {
    fn play(&mut self) {
        if self.loaded && self.current_secs >= self.duration_secs {
            self.current_secs = 0.0;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.current_secs
    }

    fn set_current_time(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let upper = if self.loaded { self.duration_secs } else { f64::MAX };
        self.current_secs = secs.clamp(0.0, upper);
        if self.loaded {
            self.notifier.notify(ClockEvent::TimeAdvanced);
        }
    }

    fn duration(&self) -> f64 {
        if self.loaded {
            self.duration_secs
        } else {
            f64::NAN
        }
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}

/// Fullscreen surface that can be told to refuse requests, or to have no
/// fullscreen support at all.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    fullscreen: bool,
    deny_requests: bool,
    supported: bool,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self {
            fullscreen: false,
            deny_requests: false,
            supported: true,
        }
    }
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface that rejects every fullscreen transition.
    #[must_use]
    pub fn denying() -> Self {
        Self {
            deny_requests: true,
            ..Self::default()
        }
    }

    /// A surface without fullscreen support, e.g. an embedded frame.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::default()
        }
    }

    fn check_request(&self) -> Result<(), FullscreenError> {
        if !self.supported {
            return Err(FullscreenError::Unsupported);
        }
        if self.deny_requests {
            return Err(FullscreenError::Denied("headless surface".to_string()));
        }
        Ok(())
    }

    pub fn set_deny_requests(&mut self, deny: bool) {
        self.deny_requests = deny;
    }
}

impl FullscreenSurface for HeadlessSurface {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.check_request()?;
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.check_request()?;
        self.fullscreen = false;
        Ok(())
    }
}
