// SPDX-License-Identifier: MPL-2.0
//! Playback control overlay core.
//!
//! The [`PlaybackController`] keeps overlay state in step with a
//! [`MediaClock`]: gestures become clock commands, clock notifications become
//! derived UI state, and the playback position is persisted per video
//! identity through a [`KeyValueStore`].

pub mod clock;
mod controller;
pub mod events;
pub mod fullscreen;
pub mod shortcuts;
pub mod simulated;
mod state;
pub mod store;
pub mod time_format;
pub mod timeline;
pub mod view;

pub use clock::{ClockEvent, MediaClock};
pub use controller::{PlaybackController, PlayerOptions};
pub use events::{ClockListener, ClockNotifier};
pub use fullscreen::FullscreenSurface;
pub use simulated::{HeadlessSurface, SimulatedClock};
pub use state::PlaybackState;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use time_format::format_duration;
pub use timeline::TimelineRegion;
pub use view::{ControlsView, Gesture, PreviewFrame, Render};
