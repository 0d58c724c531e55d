// SPDX-License-Identifier: MPL-2.0
//! Timestamp formatting for the duration display.

/// Formats seconds as `m:ss`, or `h:mm:ss` once an hour is reached.
///
/// The leading unit is never zero-padded. Negative and non-finite input
/// renders as `0:00`.
///
/// # Examples
///
/// ```
/// use playback_overlay::player::format_duration;
///
/// assert_eq!(format_duration(65.0), "1:05");
/// assert_eq!(format_duration(3661.0), "1:01:01");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    };
    let secs = (total_secs % 60.0).floor() as u64;
    let minutes = (total_secs / 60.0).floor() as u64 % 60;
    let hours = (total_secs / 3600.0).floor() as u64;

    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_handles_zero() {
        assert_eq!(format_duration(0.0), "0:00");
    }

    #[test]
    fn format_duration_handles_seconds() {
        assert_eq!(format_duration(9.0), "0:09");
        assert_eq!(format_duration(45.9), "0:45");
    }

    #[test]
    fn format_duration_handles_minutes() {
        assert_eq!(format_duration(65.0), "1:05");
        assert_eq!(format_duration(600.0), "10:00");
        assert_eq!(format_duration(3599.99), "59:59");
    }

    #[test]
    fn format_duration_handles_hours() {
        assert_eq!(format_duration(3600.0), "1:00:00");
        assert_eq!(format_duration(3661.0), "1:01:01");
        assert_eq!(format_duration(36_000.0 + 5.0), "10:00:05");
    }

    #[test]
    fn format_duration_handles_invalid_input() {
        assert_eq!(format_duration(-10.0), "0:00");
        assert_eq!(format_duration(f64::NAN), "0:00");
        assert_eq!(format_duration(f64::INFINITY), "0:00");
    }
}
