//! Track duration formatting.
//!
//! Provides the `minutes:seconds` display format used for tracklist
//! entries across the sleeve crates.

const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

/// Format a millisecond track duration as `M:SS`.
///
/// Seconds are zero-padded to two digits; minutes are not padded. Callers
/// with no duration keep the field absent rather than formatting zero.
///
/// # Examples
///
/// ```
/// use sleeve_common::time::format_track_duration;
///
/// assert_eq!(format_track_duration(185_000), "3:05");
/// assert_eq!(format_track_duration(60_000), "1:00");
/// ```
pub fn format_track_duration(millis: u64) -> String {
    let minutes = millis / MILLIS_PER_MINUTE;
    let seconds = (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    format!("{}:{:02}", minutes, seconds)
}
