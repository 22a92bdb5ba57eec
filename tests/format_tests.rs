// Host-side tests for display text formatting and the wall clock.

use panel_core::format::{
    distance, fixed_percent, int_percent, meters, mm_ss, system_time_banner, width_percent,
};
use panel_core::WallClock;

#[test]
fn percentages() {
    assert_eq!(fixed_percent(73.456, 1), "73.5%");
    assert_eq!(fixed_percent(88.7, 1), "88.7%");
    assert_eq!(fixed_percent(0.0, 1), "0.0%");
    assert_eq!(int_percent(95.0), "95%");
    assert_eq!(width_percent(50.0), "50%");
    assert_eq!(width_percent(100.0), "100%");
}

#[test]
fn lengths() {
    assert_eq!(meters(145.8), "145.8 M");
    assert_eq!(meters(680.04), "680.0 M");
    assert_eq!(distance(1187.9), "DIST: 1187 M");
    assert_eq!(distance(0.0), "DIST: 0 M");
}

#[test]
fn minutes_and_seconds() {
    assert_eq!(mm_ss(125), "02:05");
    assert_eq!(mm_ss(300), "05:00");
    assert_eq!(mm_ss(59), "00:59");
    assert_eq!(mm_ss(0), "00:00");
    assert_eq!(mm_ss(6000), "100:00");
}

#[test]
fn wall_clock_renders_and_wraps() {
    let c = WallClock::new(7, 4, 9);
    assert_eq!(c.to_string(), "07:04:09");
    assert_eq!(system_time_banner(c), "// SYS TIME: 07:04:09 //");
    assert_eq!(WallClock::new(23, 59, 59).advanced(2), WallClock::new(0, 0, 1));
    assert_eq!(
        WallClock::from_seconds_of_day(WallClock::SECONDS_PER_DAY + 61),
        WallClock::new(0, 1, 1)
    );
    assert_eq!(WallClock::new(1, 2, 3).seconds_of_day(), 3723);
}
