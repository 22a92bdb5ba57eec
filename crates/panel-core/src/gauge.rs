//! Bounded random-walk gauges.

use crate::rng;
use rand::Rng;
use thiserror::Error;

/// Invalid gauge or screen configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name}: bounds are inverted ({min} > {max})")]
    InvertedBounds { name: &'static str, min: f64, max: f64 },
    #[error("{name}: value {value} is outside [{min}, {max}]")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name}: {what} must be a number")]
    NotANumber { name: &'static str, what: &'static str },
    #[error("{name}: walk magnitude {magnitude} is negative")]
    NegativeMagnitude { name: &'static str, magnitude: f64 },
    #[error("{name}: probability {p} is outside [0, 1]")]
    Probability { name: &'static str, p: f64 },
    #[error("{name}: period must be non-zero")]
    ZeroPeriod { name: &'static str },
}

/// Inclusive value range. Either side may be infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const UNBOUNDED: Bounds = Bounds {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };
    pub const PERCENT: Bounds = Bounds {
        min: 0.0,
        max: 100.0,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// Saturating clamp; never reflects off a bound.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Per-tick perturbation: `delta = (u - bias) * magnitude`, `u` uniform in `[0, 1)`.
///
/// A bias of 0.5 is a symmetric walk; 1.0 only ever decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walk {
    pub magnitude: f64,
    pub bias: f64,
}

impl Walk {
    pub const fn symmetric(magnitude: f64) -> Self {
        Self {
            magnitude,
            bias: 0.5,
        }
    }

    pub const fn biased(magnitude: f64, bias: f64) -> Self {
        Self { magnitude, bias }
    }

    #[inline]
    pub fn delta<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (rng::unit(rng) - self.bias) * self.magnitude
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quantize {
    #[default]
    None,
    /// Integer gauges: floor after the step, before clamping.
    Floor,
    /// Integer gauges that stay centred on their value under a symmetric walk.
    Round,
}

/// Static description of a gauge, validated into a [`Gauge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeSpec {
    pub name: &'static str,
    pub initial: f64,
    pub bounds: Bounds,
    pub walk: Walk,
    pub quantize: Quantize,
}

impl GaugeSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.name;
        if self.initial.is_nan() {
            return Err(ConfigError::NotANumber {
                name,
                what: "initial value",
            });
        }
        if self.bounds.min.is_nan() || self.bounds.max.is_nan() {
            return Err(ConfigError::NotANumber {
                name,
                what: "bound",
            });
        }
        if self.walk.magnitude.is_nan() || self.walk.bias.is_nan() {
            return Err(ConfigError::NotANumber { name, what: "walk" });
        }
        if self.bounds.min > self.bounds.max {
            return Err(ConfigError::InvertedBounds {
                name,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        if !self.bounds.contains(self.initial) {
            return Err(ConfigError::OutOfBounds {
                name,
                value: self.initial,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        if self.walk.magnitude < 0.0 {
            return Err(ConfigError::NegativeMagnitude {
                name,
                magnitude: self.walk.magnitude,
            });
        }
        Ok(())
    }
}

/// A single bounded numeric field updated by a random walk each tick.
#[derive(Clone, Debug)]
pub struct Gauge {
    spec: GaugeSpec,
    value: f64,
}

impl Gauge {
    pub fn new(spec: GaugeSpec) -> Result<Self, ConfigError> {
        spec.validate()?;
        Ok(Self {
            spec,
            value: spec.initial,
        })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.spec.bounds
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Apply one walk step and return the new, clamped value.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let next = self.value + self.spec.walk.delta(rng);
        let next = match self.spec.quantize {
            Quantize::None => next,
            Quantize::Floor => next.floor(),
            Quantize::Round => next.round(),
        };
        self.value = self.spec.bounds.clamp(next);
        self.value
    }

    /// Overwrite the value (clamped). Used to pin a state in tests and demos.
    pub fn set(&mut self, v: f64) {
        self.value = self.spec.bounds.clamp(v);
    }
}
