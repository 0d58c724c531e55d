// SPDX-License-Identifier: MPL-2.0
//! Timeline geometry and scrub-preview addressing.

use crate::app::config::{MIN_PREVIEW_INDEX, PREVIEW_INTERVAL_SECS};
use std::path::{Path, PathBuf};

/// Horizontal bounds of the timeline region, in the same coordinate space as
/// pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRegion {
    pub left: f64,
    pub width: f64,
}

impl TimelineRegion {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the timeline under `pointer_x`, clamped to `[0, 1]`.
    ///
    /// A degenerate (zero, negative, or non-finite) width yields 0.
    #[must_use]
    pub fn percent_at(&self, pointer_x: f64) -> f64 {
        if !(self.width.is_finite() && self.width > 0.0) {
            return 0.0;
        }
        let offset = (pointer_x - self.left).clamp(0.0, self.width);
        if offset.is_nan() {
            return 0.0;
        }
        offset / self.width
    }
}

/// Thumbnail index for a timeline fraction: one per ten seconds, 1-indexed.
///
/// Unknown durations fall back to the first thumbnail.
#[must_use]
pub fn preview_index(percent: f64, duration_secs: f64) -> u32 {
    let raw = (percent * duration_secs / PREVIEW_INTERVAL_SECS).floor();
    if !raw.is_finite() || raw < f64::from(MIN_PREVIEW_INDEX) {
        return MIN_PREVIEW_INDEX;
    }
    // Saturating float to int conversion.
    raw as u32
}

/// Path of thumbnail `index` under `asset_root`: `preview{index}.jpg`.
#[must_use]
pub fn preview_path(asset_root: &Path, index: u32) -> PathBuf {
    asset_root.join(format!("preview{index}.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn percent_is_relative_to_region_left() {
        let region = TimelineRegion::new(100.0, 400.0);
        assert_abs_diff_eq!(region.percent_at(100.0), 0.0);
        assert_abs_diff_eq!(region.percent_at(200.0), 0.25);
        assert_abs_diff_eq!(region.percent_at(500.0), 1.0);
    }

    #[test]
    fn percent_is_clamped_outside_region() {
        let region = TimelineRegion::new(100.0, 400.0);
        assert_abs_diff_eq!(region.percent_at(-50.0), 0.0);
        assert_abs_diff_eq!(region.percent_at(10_000.0), 1.0);
    }

    #[test]
    fn degenerate_region_yields_zero() {
        assert_abs_diff_eq!(TimelineRegion::new(0.0, 0.0).percent_at(10.0), 0.0);
        assert_abs_diff_eq!(TimelineRegion::new(0.0, -5.0).percent_at(10.0), 0.0);
        assert_abs_diff_eq!(TimelineRegion::new(0.0, 100.0).percent_at(f64::NAN), 0.0);
    }

    #[test]
    fn preview_index_uses_ten_second_buckets() {
        assert_eq!(preview_index(0.25, 100.0), 2);
        assert_eq!(preview_index(0.5, 120.0), 6);
        assert_eq!(preview_index(1.0, 95.0), 9);
    }

    #[test]
    fn preview_index_never_below_one() {
        assert_eq!(preview_index(0.0, 100.0), 1);
        assert_eq!(preview_index(0.05, 100.0), 1);
        assert_eq!(preview_index(0.5, f64::NAN), 1);
        assert_eq!(preview_index(0.5, 0.0), 1);
    }

    #[test]
    fn preview_path_follows_naming_contract() {
        assert_eq!(
            preview_path(Path::new("assets/previewImgs"), 3),
            PathBuf::from("assets/previewImgs/preview3.jpg")
        );
    }
}
