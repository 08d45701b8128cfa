//! Conversions between calendar time and timeline pixel coordinates.
//!
//! Every function here is total: out-of-range pixel offsets clamp to the
//! day's minute bounds and degenerate durations clamp to the minimum block
//! height rather than erroring.

use chrono::{DateTime, Duration, Local, NaiveTime, Timelike};

/// Minimum rendered block height regardless of duration.
pub const MIN_BLOCK_HEIGHT: f32 = 20.0;

/// Last minute of the day, for clamping pixel→time conversions.
pub const MAX_MINUTE: i64 = 1439;

/// Wall-clock minutes since midnight, ignoring seconds.
pub fn minutes_since_midnight(t: DateTime<Local>) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Vertical position of a time on the timeline.
pub fn y_position(t: DateTime<Local>, pixels_per_minute: f32) -> f32 {
    minutes_since_midnight(t) as f32 * pixels_per_minute
}

/// Rendered height of a block, floored at [`MIN_BLOCK_HEIGHT`].
///
/// Zero or negative durations clamp to the floor; this is display-only and
/// never alters the underlying times.
pub fn block_height(start: DateTime<Local>, end: DateTime<Local>, pixels_per_minute: f32) -> f32 {
    let minutes = (end - start).num_minutes() as f32;
    (minutes * pixels_per_minute).max(MIN_BLOCK_HEIGHT)
}

/// Inverse of [`y_position`]: the time a vertical offset lands on, within
/// the anchor's calendar day.
///
/// Offsets above or below the day clamp to 00:00 and 23:59; the result is
/// always a valid time within the anchor day.
pub fn time_from_y_offset(y: f32, day_anchor: DateTime<Local>, pixels_per_minute: f32) -> DateTime<Local> {
    let minutes = if pixels_per_minute > 0.0 {
        ((y / pixels_per_minute).floor() as i64).clamp(0, MAX_MINUTE)
    } else {
        0
    };

    day_start(day_anchor) + Duration::minutes(minutes)
}

/// Midnight at the start of the anchor's calendar day.
///
/// On days where local midnight falls inside a DST gap, the first valid
/// wall-clock time after midnight is used (gaps are 30 or 60 minutes), so
/// the day clamp stays anchored to the start of the day.
pub fn day_start(day_anchor: DateTime<Local>) -> DateTime<Local> {
    let midnight = day_anchor.date_naive().and_time(NaiveTime::MIN);

    for minutes in [0, 30, 60] {
        let candidate = (midnight + Duration::minutes(minutes))
            .and_local_timezone(Local)
            .earliest();
        if let Some(t) = candidate {
            return t;
        }
    }

    day_anchor
}

/// Floor a time to the nearest lower multiple of `interval_minutes`,
/// zeroing seconds.
///
/// This is deliberately a floor, not a round-to-nearest: minute 17 at a
/// 10-minute interval snaps to minute 10, never 20.
pub fn snap_to_interval(t: DateTime<Local>, interval_minutes: u32) -> DateTime<Local> {
    let minute = if interval_minutes > 0 {
        t.minute() - t.minute() % interval_minutes
    } else {
        t.minute()
    };

    let snapped = NaiveTime::from_hms_opt(t.hour(), minute, 0).unwrap_or(NaiveTime::MIN);
    t.date_naive()
        .and_time(snapped)
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or(t)
}
