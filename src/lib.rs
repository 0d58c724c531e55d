// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` keeps a media transport overlay synchronized with a
//! media element's playback clock.
//!
//! It covers play/pause, volume and mute, rate cycling, fullscreen and theater
//! mode, drag-to-seek with preview thumbnails, and a resume position persisted
//! per video identity. Rendering, the host fullscreen API and storage are
//! injected capabilities.

pub mod app;
pub mod domain;
pub mod error;
pub mod player;

#[cfg(test)]
mod test_utils;
