//! Tactical screen: pilot sync, AT field, power, damage, target and comms.

use crate::chatter::Channel;
use crate::constants::*;
use crate::damage::DamageReport;
use crate::display::{flush_log, DisplaySink, Region};
use crate::format::{self, WallClock};
use crate::gauge::{Bounds, ConfigError, Gauge, GaugeSpec, Quantize, Walk};
use crate::logbook::{LogBook, LogKind};
use crate::power::{PowerEvent, PowerParams, PowerSource, PowerSystem};
use crate::thresholds::{AtFieldStatus, BatteryBand, SyncStatus, TimerUrgency};
use rand::Rng;
use std::time::Duration;

const UMBILICAL_SEVERED: &str = "UMBILICAL CABLE SEVERED - SWITCHING TO INTERNAL POWER";

#[derive(Clone, Debug)]
pub struct TacticalConfig {
    pub sync_ratio: GaugeSpec,
    pub plug_depth: GaugeSpec,
    pub at_field: GaugeSpec,
    pub target_distance: GaugeSpec,
    pub power: PowerParams,
    pub damage_chance: f64,
    pub ch1: Channel,
    pub ch2: Channel,
    pub log_capacity: usize,
    pub data_period: Duration,
}

impl Default for TacticalConfig {
    fn default() -> Self {
        Self {
            sync_ratio: GaugeSpec {
                name: "sync_ratio",
                initial: SYNC_RATIO_INITIAL,
                bounds: Bounds::PERCENT,
                walk: Walk::symmetric(SYNC_RATIO_WALK),
                quantize: Quantize::None,
            },
            plug_depth: GaugeSpec {
                name: "plug_depth",
                initial: PLUG_DEPTH_INITIAL,
                bounds: Bounds::UNBOUNDED,
                walk: Walk::symmetric(PLUG_DEPTH_WALK),
                quantize: Quantize::None,
            },
            at_field: GaugeSpec {
                name: "at_field",
                initial: AT_FIELD_INITIAL,
                bounds: Bounds::PERCENT,
                walk: Walk::biased(AT_FIELD_WALK, AT_FIELD_BIAS),
                quantize: Quantize::Floor,
            },
            target_distance: GaugeSpec {
                name: "target_distance",
                initial: TARGET_DISTANCE_INITIAL,
                bounds: Bounds::at_least(0.0),
                walk: Walk::biased(TARGET_APPROACH_MAX, 1.0),
                quantize: Quantize::None,
            },
            power: PowerParams::default(),
            damage_chance: DAMAGE_CHANCE,
            ch1: Channel::ch1(),
            ch2: Channel::ch2(),
            log_capacity: LOG_CAPACITY,
            data_period: Duration::from_millis(TACTICAL_TICK_MS),
        }
    }
}

impl TacticalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spec in [
            &self.sync_ratio,
            &self.plug_depth,
            &self.at_field,
            &self.target_distance,
        ] {
            spec.validate()?;
        }
        for (name, p) in [
            ("damage_chance", self.damage_chance),
            ("power.switch_chance", self.power.switch_chance),
            ("ch1.chance", self.ch1.chance),
            ("ch2.chance", self.ch2.chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Probability { name, p });
            }
        }
        if self.data_period.is_zero() {
            return Err(ConfigError::ZeroPeriod {
                name: "data_period",
            });
        }
        Ok(())
    }
}

/// Everything one tick computed, ready to be written to the display.
#[derive(Clone, Debug, PartialEq)]
pub struct TacticalView {
    pub sync_ratio: String,
    pub sync_status: SyncStatus,
    pub plug_depth: String,
    pub at_field: String,
    pub at_field_status: AtFieldStatus,
    pub target_distance: String,
    pub battery_width: String,
    pub battery_band: BatteryBand,
    pub power_source: PowerSource,
    /// Set until the switch to internal power has been rendered once.
    pub power_switched: bool,
    /// Countdown text and color while on internal power.
    pub internal_timer: Option<(String, TimerUrgency)>,
    pub damage: Option<DamageReport>,
    pub comm_ch1: Option<String>,
    pub comm_ch2: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TacticalState {
    sync_ratio: Gauge,
    plug_depth: Gauge,
    at_field: Gauge,
    target_distance: Gauge,
    power: PowerSystem,
    power_announced: bool,
    damage_chance: f64,
    ch1: Channel,
    ch2: Channel,
    log: LogBook,
}

impl TacticalState {
    pub fn new(config: &TacticalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sync_ratio: Gauge::new(config.sync_ratio)?,
            plug_depth: Gauge::new(config.plug_depth)?,
            at_field: Gauge::new(config.at_field)?,
            target_distance: Gauge::new(config.target_distance)?,
            power: PowerSystem::new(config.power),
            power_announced: false,
            damage_chance: config.damage_chance,
            ch1: config.ch1.clone(),
            ch2: config.ch2.clone(),
            log: LogBook::with_capacity(config.log_capacity),
        })
    }

    /// Advance every field by one tick and compute the resulting view.
    ///
    /// Random draws happen in a fixed order (gauges, power, damage, ch1,
    /// ch2) so a seeded generator replays identically.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, now: WallClock) -> TacticalView {
        self.sync_ratio.step(rng);
        self.plug_depth.step(rng);
        self.at_field.step(rng);
        self.target_distance.step(rng);

        if let Some(PowerEvent::SwitchedToInternal) = self.power.tick(rng) {
            self.log.push(now, LogKind::Critical, UMBILICAL_SEVERED);
        }

        let damage = DamageReport::roll(rng, self.damage_chance);
        if let Some(d) = &damage {
            self.log.push(now, LogKind::Warning, d.log_message());
        }

        let comm_ch1 = self.ch1.roll(rng);
        let comm_ch2 = self.ch2.roll(rng);

        let mut view = self.view();
        view.damage = damage;
        view.comm_ch1 = comm_ch1;
        view.comm_ch2 = comm_ch2;
        view
    }

    /// Current gauge-derived view with no event fields set.
    pub fn view(&self) -> TacticalView {
        let sync = self.sync_ratio.value();
        let at = self.at_field.value();
        let battery = self.power.battery();
        let internal_timer = self.power.is_internal().then(|| {
            let remaining = self.power.remaining_ticks();
            (
                format::mm_ss(remaining),
                TimerUrgency::from_remaining(remaining),
            )
        });
        TacticalView {
            sync_ratio: format::fixed_percent(sync, 1),
            sync_status: SyncStatus::from_ratio(sync),
            plug_depth: format::meters(self.plug_depth.value()),
            at_field: format::int_percent(at),
            at_field_status: AtFieldStatus::from_strength(at),
            target_distance: format::distance(self.target_distance.value()),
            battery_width: format::width_percent(battery),
            battery_band: BatteryBand::from_level(battery),
            power_source: self.power.source(),
            power_switched: self.power.is_internal() && !self.power_announced,
            internal_timer,
            damage: None,
            comm_ch1: None,
            comm_ch2: None,
        }
    }

    /// Write a computed view and any new log entries to the display.
    pub fn render(&mut self, view: &TacticalView, sink: &mut dyn DisplaySink) {
        sink.set_text(Region::SyncRatio, &view.sync_ratio);
        sink.set_text(Region::PlugDepth, &view.plug_depth);
        sink.set_text(Region::AtFieldStrength, &view.at_field);
        sink.set_text(Region::TargetDistance, &view.target_distance);

        sink.set_text(Region::SyncStatus, view.sync_status.label());
        sink.set_class(
            Region::SyncStatus,
            &format!("status-indicator {}", view.sync_status.class()),
        );
        sink.set_text(Region::AtFieldStatus, view.at_field_status.label());
        sink.set_class(
            Region::AtFieldStatus,
            &format!("status-indicator {}", view.at_field_status.class()),
        );

        sink.set_style(Region::BatteryBar, "width", &view.battery_width);
        sink.set_class(Region::BatteryBar, view.battery_band.class());

        if view.power_switched {
            sink.set_text(Region::PowerStatus, view.power_source.label());
            sink.add_class(Region::PowerStatus, "warning");
            self.power_announced = true;
        }

        match &view.internal_timer {
            Some((text, urgency)) => {
                sink.set_text(Region::InternalTimer, text);
                sink.set_style(Region::InternalTimer, "display", "inline");
                sink.set_style(Region::InternalTimer, "color", urgency.color());
            }
            None => sink.set_style(Region::InternalTimer, "display", "none"),
        }

        if let Some(d) = &view.damage {
            sink.set_text(Region::DamageStatus, &d.to_string());
            sink.set_class(Region::DamageStatus, d.severity.class());
        }
        if let Some(line) = &view.comm_ch1 {
            sink.set_text(Region::CommCh1, line);
        }
        if let Some(line) = &view.comm_ch2 {
            sink.set_text(Region::CommCh2, line);
        }

        flush_log(&mut self.log, Region::AlertLog, sink);
    }

    /// Initial population: one full update, then the start-up log lines.
    pub fn boot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: WallClock,
        sink: &mut dyn DisplaySink,
    ) {
        let view = self.update(rng, now);
        self.log.push(now, LogKind::Sys, "MAGI SYSTEM KERNEL ONLINE");
        self.log
            .push(now, LogKind::Op, "TACTICAL DISPLAY INITIALIZED");
        self.render(&view, sink);
        log::info!("[tactical] display initialized");
    }

    /// Force the umbilical cut outside the random trigger.
    pub fn sever_umbilical(&mut self, now: WallClock) -> bool {
        if !self.power.switch_to_internal() {
            return false;
        }
        self.log.push(now, LogKind::Critical, UMBILICAL_SEVERED);
        true
    }

    pub fn sync_ratio(&self) -> &Gauge {
        &self.sync_ratio
    }

    pub fn plug_depth(&self) -> &Gauge {
        &self.plug_depth
    }

    pub fn at_field(&self) -> &Gauge {
        &self.at_field
    }

    pub fn target_distance(&self) -> &Gauge {
        &self.target_distance
    }

    pub fn power(&self) -> &PowerSystem {
        &self.power
    }

    pub fn log(&self) -> &LogBook {
        &self.log
    }
}
