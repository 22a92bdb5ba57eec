//! Umbilical/internal power model.
//!
//! On external power the battery tops itself up and a rare random event can
//! sever the cable. Once on internal power the battery drains with a
//! countdown and never switches back.

use crate::constants::*;
use crate::countdown::Countdown;
use crate::rng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerSource {
    External,
    Internal,
}

impl PowerSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::External => "EXTERNAL",
            Self::Internal => "INTERNAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerEvent {
    SwitchedToInternal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerParams {
    pub internal_ticks: u32,
    pub recharge_per_tick: f64,
    pub switch_chance: f64,
}

impl Default for PowerParams {
    fn default() -> Self {
        Self {
            internal_ticks: INTERNAL_POWER_TICKS,
            recharge_per_tick: BATTERY_RECHARGE_PER_TICK,
            switch_chance: INTERNAL_POWER_CHANCE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PowerSystem {
    params: PowerParams,
    source: PowerSource,
    timer: Countdown,
    battery: f64,
}

impl PowerSystem {
    pub fn new(params: PowerParams) -> Self {
        Self {
            params,
            source: PowerSource::External,
            timer: Countdown::new(params.internal_ticks),
            battery: BATTERY_FULL,
        }
    }

    /// One data tick. Draws a random sample only while on external power.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<PowerEvent> {
        match self.source {
            PowerSource::Internal => {
                self.timer.tick();
                self.battery = self.timer.fraction_remaining() * BATTERY_FULL;
                None
            }
            PowerSource::External => {
                self.battery = (self.battery + self.params.recharge_per_tick).min(BATTERY_FULL);
                if rng::chance(rng, self.params.switch_chance) && self.switch_to_internal() {
                    Some(PowerEvent::SwitchedToInternal)
                } else {
                    None
                }
            }
        }
    }

    /// Cut the umbilical. Returns false if already on internal power.
    pub fn switch_to_internal(&mut self) -> bool {
        if self.source == PowerSource::Internal {
            return false;
        }
        self.source = PowerSource::Internal;
        self.timer.reset();
        log::info!(
            "[power] switched to internal power ({} ticks)",
            self.timer.total()
        );
        true
    }

    #[inline]
    pub fn source(&self) -> PowerSource {
        self.source
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.source == PowerSource::Internal
    }

    /// Battery percentage in `[0, 100]`.
    #[inline]
    pub fn battery(&self) -> f64 {
        self.battery
    }

    #[inline]
    pub fn remaining_ticks(&self) -> u32 {
        self.timer.remaining()
    }
}

impl Default for PowerSystem {
    fn default() -> Self {
        Self::new(PowerParams::default())
    }
}
