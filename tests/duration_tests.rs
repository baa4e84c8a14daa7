use chrono::TimeDelta;
use rpclogger::core::duration::{
    adjust_for_lunch, format_hms, format_rounded_work_hours, format_work_hours,
    round_to_nearest_half_hour, to_decimal_hours,
};

fn hm(h: i64, m: i64) -> TimeDelta {
    TimeDelta::hours(h) + TimeDelta::minutes(m)
}

#[test]
fn test_adjust_for_lunch_subtracts_one_hour() {
    assert_eq!(adjust_for_lunch(hm(9, 30)), hm(8, 30));
    assert_eq!(adjust_for_lunch(hm(1, 1)), hm(0, 1));
}

#[test]
fn test_adjust_for_lunch_never_negative() {
    assert_eq!(adjust_for_lunch(hm(0, 40)), TimeDelta::zero());
    assert_eq!(adjust_for_lunch(hm(1, 0)), TimeDelta::zero());
    assert_eq!(adjust_for_lunch(hm(-3, 0)), TimeDelta::zero());

    for m in (-120..=240).step_by(7) {
        let d = TimeDelta::minutes(m);
        let expected = (d - TimeDelta::hours(1)).max(TimeDelta::zero());
        assert_eq!(adjust_for_lunch(d), expected, "minutes={m}");
    }
}

#[test]
fn test_round_half_hour_breakpoint_is_twenty_minutes() {
    assert_eq!(round_to_nearest_half_hour(hm(8, 0)), hm(8, 0));
    assert_eq!(round_to_nearest_half_hour(hm(8, 19)), hm(8, 0));
    assert_eq!(round_to_nearest_half_hour(hm(8, 20)), hm(8, 30));
    assert_eq!(round_to_nearest_half_hour(hm(8, 49)), hm(8, 30));
    assert_eq!(round_to_nearest_half_hour(hm(8, 50)), hm(9, 0));
    // seconds do not push 19 minutes over the breakpoint
    assert_eq!(
        round_to_nearest_half_hour(hm(8, 19) + TimeDelta::seconds(59)),
        hm(8, 0)
    );
}

#[test]
fn test_round_half_hour_is_idempotent() {
    for k in 0..=48 {
        let d = TimeDelta::minutes(k * 30);
        assert_eq!(round_to_nearest_half_hour(d), d);
        assert_eq!(
            round_to_nearest_half_hour(round_to_nearest_half_hour(d + TimeDelta::minutes(22))),
            round_to_nearest_half_hour(d + TimeDelta::minutes(22))
        );
    }
}

#[test]
fn test_round_half_hour_negative_uses_floor() {
    // -10 min: lower boundary is -30, 20 minutes above it → rounds up
    assert_eq!(round_to_nearest_half_hour(TimeDelta::minutes(-10)), TimeDelta::zero());
    assert_eq!(round_to_nearest_half_hour(TimeDelta::minutes(-15)), TimeDelta::minutes(-30));
}

#[test]
fn test_decimal_hours_truncates_below_twenty_five_minutes() {
    // raw durations: lunch is removed first
    assert_eq!(to_decimal_hours(hm(9, 0)), 8.0);
    assert_eq!(to_decimal_hours(hm(9, 24)), 8.0);
    assert_eq!(to_decimal_hours(hm(9, 25)), 8.5);
    assert_eq!(to_decimal_hours(hm(9, 30)), 8.5);
    assert_eq!(to_decimal_hours(hm(9, 44)), 8.5);
    assert_eq!(to_decimal_hours(hm(9, 45)), 9.0);
    assert_eq!(to_decimal_hours(hm(9, 59)), 9.0);
}

#[test]
fn test_decimal_hours_clamps_to_zero() {
    assert_eq!(to_decimal_hours(hm(0, 40)), 0.0);
    assert_eq!(to_decimal_hours(hm(-2, 0)), 0.0);
}

#[test]
fn test_rounding_thresholds_are_independent() {
    // 22 minutes past: half-hour rounding goes up (>= 20)...
    assert_eq!(round_to_nearest_half_hour(hm(8, 22)), hm(8, 30));
    // ...while the decimal value still truncates (< 25)
    assert_eq!(to_decimal_hours(hm(9, 22)), 8.0);

    // 20 minutes: up for the rounding, down for the decimal
    assert_eq!(round_to_nearest_half_hour(hm(8, 20)), hm(8, 30));
    assert_eq!(to_decimal_hours(hm(9, 20)), 8.0);
}

#[test]
fn test_format_hms() {
    assert_eq!(format_hms(None), "N/A");
    assert_eq!(format_hms(Some(TimeDelta::zero())), "00:00:00");
    assert_eq!(format_hms(Some(hm(8, 30) + TimeDelta::seconds(5))), "08:30:05");
    assert_eq!(format_hms(Some(hm(26, 0))), "26:00:00");
}

#[test]
fn test_presentation_columns() {
    assert_eq!(format_work_hours(Some(hm(9, 30))), "08:30:00");
    assert_eq!(format_rounded_work_hours(Some(hm(9, 30))), "08:30:00");
    assert_eq!(format_rounded_work_hours(Some(hm(9, 51))), "09:00:00");

    // 40 minutes of raw work: lunch wipes it out
    assert_eq!(format_work_hours(Some(hm(0, 40))), "00:00:00");
    assert_eq!(format_rounded_work_hours(Some(hm(0, 40))), "00:00:00");

    assert_eq!(format_work_hours(None), "N/A");
    assert_eq!(format_rounded_work_hours(None), "N/A");
}
