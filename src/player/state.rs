// SPDX-License-Identifier: MPL-2.0
//! Overlay playback state.
//!
//! One instance exists per attached video identity and is owned exclusively
//! by the [`PlaybackController`](super::PlaybackController). Fields are only
//! mutated through the controller; readers see them through accessors.

use crate::domain::playback::{PlaybackRate, ScrubPhase, VideoIdentity, Volume, VolumeLevel};
use crate::player::format_duration;

/// Derived UI state mirrored from the media clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub(super) is_playing: bool,
    pub(super) is_muted: bool,
    pub(super) volume: Volume,
    pub(super) playback_rate: PlaybackRate,
    pub(super) scrub: ScrubPhase,
    pub(super) current_time_text: String,
    pub(super) total_time_text: String,
    /// Progress marker ratio (0.0 - 1.0).
    pub(super) progress_position: f64,
    pub(super) full_screen: bool,
    pub(super) theater_mode: bool,
    video_identity: VideoIdentity,
}

impl PlaybackState {
    /// Fresh state for a newly attached video: paused, audible, 1x.
    #[must_use]
    pub fn new(video_identity: VideoIdentity) -> Self {
        let zero = format_duration(0.0);
        Self {
            is_playing: false,
            is_muted: false,
            volume: Volume::default(),
            playback_rate: PlaybackRate::default(),
            scrub: ScrubPhase::Idle,
            current_time_text: zero.clone(),
            total_time_text: zero,
            progress_position: 0.0,
            full_screen: false,
            theater_mode: false,
            video_identity,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Loudness class, derived from the mute flag and volume on every read.
    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::classify(self.is_muted, self.volume)
    }

    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
    }

    pub fn scrub(&self) -> ScrubPhase {
        self.scrub
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    /// Thumbnail index, `Some` only while scrubbing.
    pub fn preview_index(&self) -> Option<u32> {
        self.scrub.preview_index()
    }

    pub fn current_time_text(&self) -> &str {
        &self.current_time_text
    }

    pub fn total_time_text(&self) -> &str {
        &self.total_time_text
    }

    pub fn progress_position(&self) -> f64 {
        self.progress_position
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn is_theater_mode(&self) -> bool {
        self.theater_mode
    }

    pub fn video_identity(&self) -> &VideoIdentity {
        &self.video_identity
    }

    /// Applies a volume/mute pair, keeping `volume == 0 => muted`.
    pub(super) fn apply_volume(&mut self, volume: Volume, muted: bool) {
        self.volume = volume;
        self.is_muted = muted || volume.is_zero();
    }
}
