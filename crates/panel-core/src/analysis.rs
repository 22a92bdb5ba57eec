//! Analysis screen: sphere metrics, pattern classification, the operation
//! countdown and the MAGI verdicts.

use crate::constants::*;
use crate::countdown::Countdown;
use crate::display::{flush_log, DisplaySink, Region};
use crate::format::{self, WallClock};
use crate::gauge::{Bounds, ConfigError, Gauge, GaugeSpec, Quantize, Walk};
use crate::logbook::{LogBook, LogKind};
use crate::magi::{MagiArray, MagiLabel, MagiUnit};
use crate::thresholds::{DensityStatus, PatternClass};
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub diameter: GaugeSpec,
    pub shadow_density: GaugeSpec,
    pub pattern_confidence: GaugeSpec,
    /// Operation window length in wall-clock seconds.
    pub countdown_secs: u32,
    pub casper_cycle_chance: f64,
    pub log_capacity: usize,
    pub data_period: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            diameter: GaugeSpec {
                name: "diameter",
                initial: SPHERE_DIAMETER_INITIAL,
                bounds: Bounds::new(SPHERE_DIAMETER_MIN, SPHERE_DIAMETER_MAX),
                walk: Walk::symmetric(SPHERE_DIAMETER_WALK),
                quantize: Quantize::None,
            },
            shadow_density: GaugeSpec {
                name: "shadow_density",
                initial: SHADOW_DENSITY_INITIAL,
                bounds: Bounds::PERCENT,
                walk: Walk::symmetric(SHADOW_DENSITY_WALK),
                quantize: Quantize::None,
            },
            pattern_confidence: GaugeSpec {
                name: "pattern_confidence",
                initial: PATTERN_CONFIDENCE_INITIAL,
                bounds: Bounds::PERCENT,
                walk: Walk::symmetric(PATTERN_CONFIDENCE_WALK),
                quantize: Quantize::Round,
            },
            countdown_secs: MISSION_COUNTDOWN_SECS,
            casper_cycle_chance: CASPER_CYCLE_CHANCE,
            log_capacity: LOG_CAPACITY,
            data_period: Duration::from_millis(ANALYSIS_TICK_MS),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.diameter.validate()?;
        self.shadow_density.validate()?;
        self.pattern_confidence.validate()?;
        if !(0.0..=1.0).contains(&self.casper_cycle_chance) {
            return Err(ConfigError::Probability {
                name: "casper_cycle_chance",
                p: self.casper_cycle_chance,
            });
        }
        if self.data_period.is_zero() {
            return Err(ConfigError::ZeroPeriod {
                name: "data_period",
            });
        }
        if self.countdown_secs == 0 {
            return Err(ConfigError::ZeroPeriod {
                name: "countdown_secs",
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisView {
    pub diameter: String,
    pub shadow_density: String,
    pub density_status: DensityStatus,
    pub pattern_confidence: String,
    pub pattern: PatternClass,
    pub countdown: String,
    pub countdown_expired: bool,
    pub magi: [(MagiUnit, MagiLabel); 3],
}

#[derive(Clone, Debug)]
pub struct AnalysisState {
    diameter: Gauge,
    shadow_density: Gauge,
    pattern_confidence: Gauge,
    countdown: Countdown,
    // Time accrued toward the next countdown second.
    countdown_carry: Duration,
    data_period: Duration,
    magi: MagiArray,
    log: LogBook,
}

impl AnalysisState {
    pub fn new(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            diameter: Gauge::new(config.diameter)?,
            shadow_density: Gauge::new(config.shadow_density)?,
            pattern_confidence: Gauge::new(config.pattern_confidence)?,
            countdown: Countdown::new(config.countdown_secs),
            countdown_carry: Duration::ZERO,
            data_period: config.data_period,
            magi: MagiArray::new(config.casper_cycle_chance),
            log: LogBook::with_capacity(config.log_capacity),
        })
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, now: WallClock) -> AnalysisView {
        self.diameter.step(rng);
        self.shadow_density.step(rng);
        self.pattern_confidence.step(rng);

        self.countdown_carry += self.data_period;
        while self.countdown_carry >= Duration::from_secs(1) {
            self.countdown_carry -= Duration::from_secs(1);
            if self.countdown.tick() {
                log::info!("[analysis] operation window closed");
                self.log
                    .push(now, LogKind::Critical, "OPERATION WINDOW CLOSED");
            }
        }

        if let Some(label) = self.magi.tick(rng) {
            self.log.push(
                now,
                LogKind::Op,
                format!("{}: {}", MagiUnit::Casper.name(), label.text()),
            );
        }

        self.view()
    }

    pub fn view(&self) -> AnalysisView {
        let density = self.shadow_density.value();
        let confidence = self.pattern_confidence.value();
        AnalysisView {
            diameter: format::meters(self.diameter.value()),
            shadow_density: format::fixed_percent(density, 1),
            density_status: DensityStatus::from_density(density),
            pattern_confidence: format::int_percent(confidence),
            pattern: PatternClass::from_confidence(confidence),
            // Freezes at 00:00 once exhausted.
            countdown: format::mm_ss(self.countdown.remaining()),
            countdown_expired: self.countdown.is_expired(),
            magi: MagiUnit::ALL.map(|u| (u, self.magi.label(u))),
        }
    }

    pub fn render(&mut self, view: &AnalysisView, sink: &mut dyn DisplaySink) {
        sink.set_text(Region::SphereDiameter, &view.diameter);
        sink.set_text(Region::ShadowDensity, &view.shadow_density);
        sink.set_text(Region::DensityStatus, view.density_status.label());
        sink.set_class(
            Region::DensityStatus,
            &format!("status-indicator {}", view.density_status.class()),
        );
        sink.set_text(Region::PatternConfidence, &view.pattern_confidence);
        sink.set_text(
            Region::TargetPattern,
            &format!("PATTERN {}", view.pattern.label()),
        );
        sink.set_class(
            Region::TargetPattern,
            &format!("value {}", view.pattern.class()),
        );

        sink.set_text(Region::MissionCountdown, &view.countdown);
        sink.set_class(
            Region::MissionCountdown,
            if view.countdown_expired {
                "countdown expired"
            } else {
                "countdown"
            },
        );

        for (unit, label) in view.magi {
            let region = match unit {
                MagiUnit::Melchior => Region::MagiMelchior,
                MagiUnit::Balthasar => Region::MagiBalthasar,
                MagiUnit::Casper => Region::MagiCasper,
            };
            sink.set_text(region, label.text());
            sink.set_class(region, &format!("magi-state {}", label.class_token()));
        }

        flush_log(&mut self.log, Region::AnalysisLog, sink);
    }

    pub fn boot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: WallClock,
        sink: &mut dyn DisplaySink,
    ) {
        let view = self.update(rng, now);
        self.log
            .push(now, LogKind::Sys, "SPHERE ANALYSIS LINK ESTABLISHED");
        self.log
            .push(now, LogKind::Op, "MAGI CONSENSUS PROTOCOL ACTIVE");
        self.render(&view, sink);
        log::info!("[analysis] display initialized");
    }

    pub fn diameter(&self) -> &Gauge {
        &self.diameter
    }

    pub fn shadow_density(&self) -> &Gauge {
        &self.shadow_density
    }

    pub fn pattern_confidence(&self) -> &Gauge {
        &self.pattern_confidence
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn magi(&self) -> &MagiArray {
        &self.magi
    }

    pub fn log(&self) -> &LogBook {
        &self.log
    }
}
