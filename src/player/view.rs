// SPDX-License-Identifier: MPL-2.0
//! Rendering seam of the overlay.
//!
//! The presentation layer draws a [`ControlsView`] snapshot and reports user
//! interaction back as [`Gesture`] values. Nothing here knows about widgets.

use super::timeline::TimelineRegion;
use crate::domain::playback::VolumeLevel;
use std::path::PathBuf;

/// Gestures emitted by the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Play/pause button.
    TogglePlayback,

    /// Mute button.
    ToggleMute,

    /// Volume slider moved (0.0 to 1.0).
    SetVolume(f64),

    /// Speed button.
    CyclePlaybackRate,

    ToggleFullScreen,

    ToggleTheaterMode,

    /// Pointer pressed over the timeline.
    TimelinePointerDown { x: f64, region: TimelineRegion },

    /// Pointer moved over the timeline.
    TimelinePointerMove { x: f64, region: TimelineRegion },

    /// Pointer released over the timeline.
    TimelinePointerUp,

    /// Pointer left the timeline region.
    TimelinePointerLeave,
}

/// Scrub-preview thumbnail to display while dragging.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    /// 1-indexed thumbnail number.
    pub index: u32,
    /// Marker position as a fraction of the timeline.
    pub position: f64,
    /// Asset path (`<root>/preview{index}.jpg`).
    pub path: PathBuf,
}

/// Everything the presentation layer needs to draw the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub source: String,
    pub poster: Option<String>,

    /// Shows the play icon and the paused styling.
    pub paused: bool,
    pub volume: f64,
    pub volume_level: VolumeLevel,
    pub full_screen: bool,
    pub theater_mode: bool,

    pub current_time_text: String,
    pub total_time_text: String,

    /// Speed button label, e.g. `1.5x`.
    pub rate_label: String,

    /// Progress marker ratio (0.0 - 1.0).
    pub progress_position: f64,

    pub preview: Option<PreviewFrame>,
}

/// Render capability supplied by the host.
pub trait Render {
    fn render(&mut self, view: &ControlsView);
}
