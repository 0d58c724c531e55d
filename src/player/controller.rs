// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Mediates between the gesture surface and the media clock:
//! - Transport commands (play/pause, mute, volume, rate, display modes)
//! - Timeline scrub state machine (`Idle` ⇄ `Scrubbing`)
//! - Clock-notification reducer (time, ready, ended) with resume persistence
//!
//! All handlers run to completion on the host's event loop; a handler's state
//! mutation and its paired store write are never interleaved with another
//! handler.

use super::clock::{ClockEvent, MediaClock};
use super::events::ClockListener;
use super::fullscreen::FullscreenSurface;
use super::state::PlaybackState;
use super::store::{parse_resume_offset, resume_key, KeyValueStore};
use super::timeline::{preview_index, preview_path, TimelineRegion};
use super::view::{ControlsView, Gesture, PreviewFrame, Render};
use crate::app::config::{Config, DEFAULT_PREVIEW_ASSET_ROOT, DEFAULT_VOLUME};
use crate::domain::playback::{PlaybackRate, ScrubPhase, VideoIdentity, Volume};
use crate::error::FullscreenError;
use crate::player::format_duration;
use std::path::PathBuf;

/// Construction options for a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    /// Video source handle, passed through to the presentation layer.
    pub source: String,
    /// Optional poster image shown before playback.
    pub poster: Option<String>,
    /// Key namespacing the persisted resume offset.
    pub video_identity: VideoIdentity,
    /// Start playing immediately on attach.
    pub autoplay: bool,
    /// Volume commanded on attach. `None` adopts the clock's volume.
    pub initial_volume: Option<f64>,
    /// Directory holding scrub-preview thumbnails.
    pub preview_asset_root: PathBuf,
}

impl PlayerOptions {
    #[must_use]
    pub fn new(source: impl Into<String>, video_identity: impl Into<VideoIdentity>) -> Self {
        Self {
            source: source.into(),
            poster: None,
            video_identity: video_identity.into(),
            autoplay: false,
            initial_volume: None,
            preview_asset_root: PathBuf::from(DEFAULT_PREVIEW_ASSET_ROOT),
        }
    }

    /// Options seeded from user preferences.
    #[must_use]
    pub fn from_config(
        source: impl Into<String>,
        video_identity: impl Into<VideoIdentity>,
        config: &Config,
    ) -> Self {
        Self {
            autoplay: config.playback.autoplay.unwrap_or(false),
            initial_volume: config.playback.volume.map(|_| config.initial_volume()),
            preview_asset_root: config.preview_asset_root(),
            ..Self::new(source, video_identity)
        }
    }

    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_initial_volume(mut self, volume: f64) -> Self {
        self.initial_volume = Some(volume);
        self
    }

    #[must_use]
    pub fn with_preview_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.preview_asset_root = root.into();
        self
    }
}

/// Controller for one attached video.
///
/// Owns the clock, fullscreen surface, store and notification listener for
/// its lifetime. [`detach`](Self::detach) hands the capabilities back and
/// drops the listener, which unsubscribes from further notifications.
pub struct PlaybackController<C, F, S> {
    state: PlaybackState,
    clock: C,
    surface: F,
    store: S,
    listener: ClockListener,
    resume_key: String,
    source: String,
    poster: Option<String>,
    preview_asset_root: PathBuf,
}

impl<C, F, S> PlaybackController<C, F, S>
where
    C: MediaClock,
    F: FullscreenSurface,
    S: KeyValueStore,
{
    /// Attaches a controller to a media clock.
    ///
    /// Local volume, mute and rate are taken from the clock (a non-preset
    /// clock rate is reset to 1x). With `autoplay` the clock starts playing
    /// immediately; otherwise it is left paused.
    pub fn attach(
        options: PlayerOptions,
        mut clock: C,
        surface: F,
        store: S,
        listener: ClockListener,
    ) -> Self {
        let mut state = PlaybackState::new(options.video_identity.clone());

        if clock.muted() {
            state.apply_volume(Volume::ZERO, true);
        } else {
            state.apply_volume(Volume::new(clock.volume()), false);
        }

        state.playback_rate = match PlaybackRate::from_value(clock.playback_rate()) {
            Some(rate) => rate,
            None => {
                let rate = PlaybackRate::default();
                clock.set_playback_rate(rate.value());
                rate
            }
        };
        state.full_screen = surface.is_fullscreen();

        let mut controller = Self {
            resume_key: resume_key(&options.video_identity),
            state,
            clock,
            surface,
            store,
            listener,
            source: options.source,
            poster: options.poster,
            preview_asset_root: options.preview_asset_root,
        };

        if let Some(volume) = options.initial_volume {
            controller.set_volume(volume);
        }

        if options.autoplay {
            controller.clock.play();
            controller.state.is_playing = true;
        }

        tracing::debug!(
            identity = %options.video_identity,
            autoplay = options.autoplay,
            "attached playback controller"
        );
        controller
    }

    /// Detaches the controller, unsubscribing from clock notifications.
    ///
    /// In-memory state is discarded; only the persisted resume offset
    /// survives in the returned store.
    pub fn detach(self) -> (C, F, S) {
        tracing::debug!(identity = %self.state.video_identity(), "detached playback controller");
        let Self {
            clock,
            surface,
            store,
            listener,
            ..
        } = self;
        drop(listener);
        (clock, surface, store)
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock for driving it (e.g. simulated ticks).
    ///
    /// Commands issued directly through this handle bypass the controller's
    /// state; the resulting notifications still flow through [`pump`](Self::pump).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Transport commands
    // =========================================================================

    /// Play/pause toggle, forwarded regardless of clock readiness.
    ///
    /// Ignored while scrubbing: the clock stays paused until pointer-up.
    pub fn toggle_playback(&mut self) {
        if self.state.scrub.is_scrubbing() {
            return;
        }
        if self.state.is_playing {
            self.clock.pause();
            self.state.is_playing = false;
        } else {
            self.clock.play();
            self.state.is_playing = true;
        }
    }

    /// Mutes, or unmutes restoring the clock's own volume.
    ///
    /// The clock keeps its volume while muted, so unmuting adopts whatever it
    /// last held. If that is silence, the default volume is commanded instead
    /// so that an unmuted state never carries a zero volume.
    pub fn toggle_mute(&mut self) {
        if self.state.is_muted {
            self.clock.set_muted(false);
            let mut volume = Volume::new(self.clock.volume());
            if volume.is_zero() {
                volume = Volume::new(DEFAULT_VOLUME);
                self.clock.set_volume(volume.value());
            }
            self.state.apply_volume(volume, false);
        } else {
            self.clock.set_muted(true);
            self.state.apply_volume(Volume::ZERO, true);
        }
    }

    /// Slider change. The input is expected in `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = Volume::new(volume);
        let muted = volume.is_zero();
        self.clock.set_volume(volume.value());
        self.clock.set_muted(muted);
        self.state.apply_volume(volume, muted);
    }

    /// Advances to the next preset rate, wrapping after 2x.
    pub fn cycle_playback_rate(&mut self) {
        let rate = self.state.playback_rate.next();
        self.clock.set_playback_rate(rate.value());
        self.state.playback_rate = rate;
    }

    /// Enters or exits fullscreen.
    ///
    /// The flag only flips once the surface confirms; a refusal leaves the
    /// state untouched and is returned to the caller.
    pub fn toggle_full_screen(&mut self) -> Result<(), FullscreenError> {
        let entering = !self.surface.is_fullscreen();
        let outcome = if entering {
            self.surface.request_fullscreen()
        } else {
            self.surface.exit_fullscreen()
        };

        match outcome {
            Ok(()) => {
                self.state.full_screen = entering;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, entering, "fullscreen transition rejected");
                Err(err)
            }
        }
    }

    pub fn toggle_theater_mode(&mut self) {
        self.state.theater_mode = !self.state.theater_mode;
    }

    // =========================================================================
    // Timeline scrubbing
    // =========================================================================

    /// `Idle → Scrubbing`: seeks to the pointer and pauses.
    ///
    /// With an unknown duration no seek is issued; the pause still is.
    pub fn timeline_pointer_down(&mut self, pointer_x: f64, region: TimelineRegion) {
        let percent = region.percent_at(pointer_x);
        let duration = self.clock.duration();

        if duration.is_finite() {
            self.clock.set_current_time(percent * duration);
        }
        self.clock.pause();
        self.state.is_playing = false;
        self.state.scrub = ScrubPhase::Scrubbing {
            position: percent,
            preview_index: preview_index(percent, duration),
        };
    }

    /// Updates the preview marker and thumbnail while scrubbing.
    pub fn timeline_pointer_move(&mut self, pointer_x: f64, region: TimelineRegion) {
        if !self.state.scrub.is_scrubbing() {
            return;
        }
        let percent = region.percent_at(pointer_x);
        self.state.scrub = ScrubPhase::Scrubbing {
            position: percent,
            preview_index: preview_index(percent, self.clock.duration()),
        };
    }

    /// `Scrubbing → Idle`, resuming playback.
    pub fn timeline_pointer_up(&mut self) {
        if !self.state.scrub.is_scrubbing() {
            return;
        }
        self.state.scrub = ScrubPhase::Idle;
        self.clock.play();
        self.state.is_playing = true;
    }

    /// `Scrubbing → Idle` without resuming: playback stays paused.
    pub fn timeline_pointer_leave(&mut self) {
        if self.state.scrub.is_scrubbing() {
            self.state.scrub = ScrubPhase::Idle;
        }
    }

    /// Routes a gesture to its handler.
    pub fn dispatch(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::TogglePlayback => self.toggle_playback(),
            Gesture::ToggleMute => self.toggle_mute(),
            Gesture::SetVolume(volume) => self.set_volume(volume),
            Gesture::CyclePlaybackRate => self.cycle_playback_rate(),
            Gesture::ToggleFullScreen => {
                // Rejections are logged by toggle_full_screen.
                let _ = self.toggle_full_screen();
            }
            Gesture::ToggleTheaterMode => self.toggle_theater_mode(),
            Gesture::TimelinePointerDown { x, region } => self.timeline_pointer_down(x, region),
            Gesture::TimelinePointerMove { x, region } => self.timeline_pointer_move(x, region),
            Gesture::TimelinePointerUp => self.timeline_pointer_up(),
            Gesture::TimelinePointerLeave => self.timeline_pointer_leave(),
        }
    }

    // =========================================================================
    // Clock notifications
    // =========================================================================

    /// Applies every pending notification in arrival order.
    ///
    /// Returns the number of notifications handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.listener.try_next() {
            self.handle_clock_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_clock_event(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::TimeAdvanced => self.on_time_advanced(),
            ClockEvent::DataReady => self.on_ready(),
            ClockEvent::Ended => self.on_ended(),
        }
    }

    fn on_time_advanced(&mut self) {
        let current = self.clock.current_time();
        let duration = self.clock.duration();

        self.state.current_time_text = format_duration(current);
        self.state.total_time_text = format_duration(duration);

        if current.is_finite() {
            self.store.set(&self.resume_key, &current.to_string());
        }

        self.state.progress_position = if duration.is_finite() && duration > 0.0 {
            (current / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    fn on_ready(&mut self) {
        let offset = parse_resume_offset(self.store.get(&self.resume_key).as_deref());
        self.clock.set_current_time(offset);
        self.state.total_time_text = format_duration(self.clock.duration());
        tracing::debug!(
            identity = %self.state.video_identity(),
            offset,
            "restored resume offset"
        );
    }

    fn on_ended(&mut self) {
        self.state.is_playing = false;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Snapshot of the current state for the presentation layer.
    pub fn view(&self) -> ControlsView {
        let preview = match self.state.scrub {
            ScrubPhase::Scrubbing {
                position,
                preview_index,
            } => Some(PreviewFrame {
                index: preview_index,
                position,
                path: preview_path(&self.preview_asset_root, preview_index),
            }),
            ScrubPhase::Idle => None,
        };

        ControlsView {
            source: self.source.clone(),
            poster: self.poster.clone(),
            paused: !self.state.is_playing,
            volume: self.state.volume.value(),
            volume_level: self.state.volume_level(),
            full_screen: self.state.full_screen,
            theater_mode: self.state.theater_mode,
            current_time_text: self.state.current_time_text.clone(),
            total_time_text: self.state.total_time_text.clone(),
            rate_label: self.state.playback_rate.label(),
            progress_position: self.state.progress_position,
            preview,
        }
    }

    pub fn render_to<R: Render>(&self, renderer: &mut R) {
        renderer.render(&self.view());
    }
}

impl<C, F, S> std::fmt::Debug for PlaybackController<C, F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("resume_key", &self.resume_key)
            .finish_non_exhaustive()
    }
}
