//! Elapsed-time scheduler standing in for `setInterval`.
//!
//! The frame loop feeds it real (or simulated) frame deltas; it reports which
//! periodic jobs came due. Nothing here reads a clock, so tests advance it by
//! hand.

use crate::constants::MAX_CATCH_UP;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    /// Data update tick.
    Data,
    /// Wall-clock display refresh.
    Clock,
}

/// Fixed-period accumulator.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// A zero period is bumped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulate `dt` and return how many periods completed, at most
    /// [`MAX_CATCH_UP`]. Backlog beyond that is discarded, keeping the phase.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
            if fired == MAX_CATCH_UP {
                let periods = self.elapsed.as_nanos() / self.period.as_nanos();
                if periods > 0 {
                    log::debug!("[schedule] dropped {} late ticks", periods);
                }
                self.elapsed = Duration::from_nanos(
                    (self.elapsed.as_nanos() % self.period.as_nanos()) as u64,
                );
                break;
            }
        }
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

pub type Fired<J> = SmallVec<[J; 4]>;

/// A set of periodic jobs fired in registration order.
#[derive(Clone, Debug)]
pub struct Scheduler<J: Copy> {
    entries: Vec<(J, Interval)>,
}

impl<J: Copy> Scheduler<J> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn every(mut self, job: J, period: Duration) -> Self {
        self.entries.push((job, Interval::new(period)));
        self
    }

    /// Push every job that came due during `dt` into `out`, a job firing
    /// more than once when `dt` spans several periods.
    pub fn advance(&mut self, dt: Duration, out: &mut Fired<J>) {
        for (job, interval) in &mut self.entries {
            for _ in 0..interval.advance(dt) {
                out.push(*job);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<J: Copy> Default for Scheduler<J> {
    fn default() -> Self {
        Self::new()
    }
}
