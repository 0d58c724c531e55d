// SPDX-License-Identifier: MPL-2.0
//! Optional keyboard shortcuts.
//!
//! Hosts that want single-key control forward the resulting gestures to
//! [`PlaybackController::dispatch`](super::PlaybackController::dispatch).
//! The controller itself never listens to the keyboard.
//!
//! | Key | Gesture |
//! |-----|---------|
//! | `k` | toggle playback |
//! | `f` | toggle fullscreen |
//! | `t` | toggle theater mode |
//! | `m` | toggle mute |

use super::view::Gesture;

/// Maps a key press to a gesture.
///
/// Returns `None` when focus is on a button (the button handles its own
/// activation) and for unmapped keys. Matching is case-insensitive.
#[must_use]
pub fn gesture_for_key(key: char, focus_on_button: bool) -> Option<Gesture> {
    if focus_on_button {
        return None;
    }
    match key.to_ascii_lowercase() {
        'k' => Some(Gesture::TogglePlayback),
        'f' => Some(Gesture::ToggleFullScreen),
        't' => Some(Gesture::ToggleTheaterMode),
        'm' => Some(Gesture::ToggleMute),
        _ => None,
    }
}
