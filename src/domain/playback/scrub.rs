// SPDX-License-Identifier: MPL-2.0
//! Timeline scrub phases.

/// Where the timeline drag gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrubPhase {
    /// No pointer is held over the timeline.
    #[default]
    Idle,

    /// A pointer went down on the timeline and has not been released.
    Scrubbing {
        /// Preview marker position as a fraction of the timeline (0.0 - 1.0).
        position: f64,
        /// 1-indexed thumbnail to show for `position`.
        preview_index: u32,
    },
}

impl ScrubPhase {
    /// Returns true while a scrub gesture is in progress.
    #[must_use]
    pub fn is_scrubbing(self) -> bool {
        matches!(self, Self::Scrubbing { .. })
    }

    /// Returns the thumbnail index, only while scrubbing.
    #[must_use]
    pub fn preview_index(self) -> Option<u32> {
        match self {
            Self::Scrubbing { preview_index, .. } => Some(preview_index),
            Self::Idle => None,
        }
    }

    /// Returns the preview marker position, only while scrubbing.
    #[must_use]
    pub fn position(self) -> Option<f64> {
        match self {
            Self::Scrubbing { position, .. } => Some(position),
            Self::Idle => None,
        }
    }
}
