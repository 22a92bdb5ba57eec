// Host-side tests for the elapsed-time scheduler that replaces timers.

use panel_core::constants::MAX_CATCH_UP;
use panel_core::{Fired, Interval, Job, Scheduler};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn interval_fires_once_per_period_and_keeps_phase() {
    let mut iv = Interval::new(ms(1000));
    assert_eq!(iv.advance(ms(500)), 0);
    assert_eq!(iv.advance(ms(500)), 1);
    assert_eq!(iv.advance(ms(1500)), 1);
    assert_eq!(iv.advance(ms(499)), 0);
    assert_eq!(iv.advance(ms(1)), 1);
}

#[test]
fn many_small_frames_add_up() {
    let mut iv = Interval::new(ms(800));
    let fired: u32 = (0..600).map(|_| iv.advance(ms(16))).sum();
    // 600 * 16 ms = 9.6 s -> 12 ticks of 800 ms
    assert_eq!(fired, 12);
}

#[test]
fn catch_up_is_capped_and_backlog_dropped() {
    let mut iv = Interval::new(ms(1000));
    assert_eq!(iv.advance(ms(60_250)), MAX_CATCH_UP);
    // only the 250 ms phase survives
    assert_eq!(iv.advance(ms(700)), 0);
    assert_eq!(iv.advance(ms(50)), 1);
}

#[test]
fn zero_period_is_bumped() {
    let iv = Interval::new(Duration::ZERO);
    assert_eq!(iv.period(), ms(1));
}

#[test]
fn scheduler_reports_jobs_in_registration_order() {
    let mut sched = Scheduler::new()
        .every(Job::Data, ms(1000))
        .every(Job::Clock, ms(1000));
    assert_eq!(sched.len(), 2);

    let mut fired = Fired::new();
    sched.advance(ms(999), &mut fired);
    assert!(fired.is_empty());

    sched.advance(ms(1), &mut fired);
    assert_eq!(fired.as_slice(), &[Job::Data, Job::Clock]);
}

#[test]
fn scheduler_handles_different_periods() {
    let mut sched = Scheduler::new()
        .every(Job::Data, ms(800))
        .every(Job::Clock, ms(1000));
    let mut data = 0;
    let mut clock = 0;
    for _ in 0..250 {
        let mut fired = Fired::new();
        sched.advance(ms(16), &mut fired);
        data += fired.iter().filter(|j| **j == Job::Data).count();
        clock += fired.iter().filter(|j| **j == Job::Clock).count();
    }
    // 4 s of frames
    assert_eq!(data, 5);
    assert_eq!(clock, 4);
}

#[test]
fn empty_scheduler_never_fires() {
    let mut sched: Scheduler<Job> = Scheduler::default();
    assert!(sched.is_empty());
    let mut fired = Fired::new();
    sched.advance(ms(10_000), &mut fired);
    assert!(fired.is_empty());
}
