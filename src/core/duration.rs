//! Lunch deduction, rounding and formatting of work durations.
//!
//! These helpers are shared by the terminal table and the exporters. They
//! never touch the stored `DailySummary::work_duration`; absent durations are
//! propagated with `Option::map` by the callers and rendered as `N/A`.

use chrono::TimeDelta;

/// Fixed lunch break deducted from every work day.
pub const LUNCH_BREAK_MINUTES: i64 = 60;

/// Granularity of both roundings.
pub const HALF_HOUR_MINUTES: i64 = 30;

/// `round_to_nearest_half_hour` rounds up from this many minutes past a
/// half-hour boundary.
pub const HALF_HOUR_ROUND_UP_MINUTES: i64 = 20;

/// `to_decimal_hours` truncates to the whole hour below this many minutes.
pub const DECIMAL_ROUND_UP_MINUTES: f64 = 25.0;

pub const NOT_AVAILABLE: &str = "N/A";

/// `max(duration - 1h, 0)`.
pub fn adjust_for_lunch(duration: TimeDelta) -> TimeDelta {
    let adjusted = duration - TimeDelta::minutes(LUNCH_BREAK_MINUTES);
    adjusted.max(TimeDelta::zero())
}

/// Round to a multiple of 30 minutes, with the breakpoint at 20 minutes
/// past the lower boundary (19 min → down, 20 min → up).
pub fn round_to_nearest_half_hour(duration: TimeDelta) -> TimeDelta {
    let total_minutes = duration.num_seconds().div_euclid(60);
    let lower = total_minutes.div_euclid(HALF_HOUR_MINUTES) * HALF_HOUR_MINUTES;

    let rounded = if total_minutes - lower < HALF_HOUR_ROUND_UP_MINUTES {
        lower
    } else {
        lower + HALF_HOUR_MINUTES
    };

    TimeDelta::minutes(rounded)
}

/// Lunch-adjusted duration as fractional hours.
///
/// Below 25 minutes past the hour the value is truncated to the whole hour,
/// otherwise it is rounded to the nearest half hour.
pub fn to_decimal_hours(duration: TimeDelta) -> f64 {
    let secs = adjust_for_lunch(duration).num_seconds();
    let whole_hours = secs / 3600;
    let minutes = (secs % 3600) as f64 / 60.0;

    if minutes < DECIMAL_ROUND_UP_MINUTES {
        whole_hours as f64
    } else {
        let hours = secs as f64 / 3600.0;
        (hours * 2.0).round() / 2.0
    }
}

/// `HH:MM:SS`, hours not capped at 24; `N/A` when absent.
pub fn format_hms(duration: Option<TimeDelta>) -> String {
    let Some(d) = duration else {
        return NOT_AVAILABLE.to_string();
    };

    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    let seconds = abs % 60;

    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

/// Work hours as shown to the user: lunch-adjusted, `N/A` when absent.
pub fn format_work_hours(duration: Option<TimeDelta>) -> String {
    format_hms(duration.map(adjust_for_lunch))
}

/// Rounded column: raw duration rounded to the half hour, then lunch-adjusted.
pub fn format_rounded_work_hours(duration: Option<TimeDelta>) -> String {
    format_work_hours(duration.map(round_to_nearest_half_hour))
}
