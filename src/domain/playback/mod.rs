// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or host concerns.

pub mod newtypes;
pub mod scrub;

pub use newtypes::{PlaybackRate, VideoIdentity, Volume, VolumeLevel};
pub use scrub::ScrubPhase;
