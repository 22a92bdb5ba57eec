//! Threshold buckets mapping gauge values to status text and CSS classes.
//!
//! Each mapping is a pure function of the current value; there is no
//! hysteresis or memory between ticks.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Critical,
    Warning,
    Stable,
}

impl SyncStatus {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < SYNC_CRITICAL_BELOW {
            Self::Critical
        } else if ratio < SYNC_WARNING_BELOW {
            Self::Warning
        } else {
            Self::Stable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Stable => "STABLE",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Stable => "stable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtFieldStatus {
    Offline,
    Fluctuating,
    Active,
}

impl AtFieldStatus {
    pub fn from_strength(strength: f64) -> Self {
        if strength <= 0.0 {
            Self::Offline
        } else if strength < AT_FIELD_FLUCTUATING_BELOW {
            Self::Fluctuating
        } else {
            Self::Active
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Offline => "OFFLINE",
            Self::Fluctuating => "FLUCTUATING",
            Self::Active => "ACTIVE",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Offline => "critical",
            Self::Fluctuating => "warning",
            Self::Active => "active",
        }
    }
}

/// Battery bar coloring band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryBand {
    Critical,
    Low,
    Normal,
}

impl BatteryBand {
    pub fn from_level(level: f64) -> Self {
        if level < BATTERY_CRITICAL_BELOW {
            Self::Critical
        } else if level < BATTERY_LOW_BELOW {
            Self::Low
        } else {
            Self::Normal
        }
    }

    /// Full class attribute for the progress bar element.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Critical => "progress-bar critical",
            Self::Low => "progress-bar low",
            Self::Normal => "progress-bar",
        }
    }
}

/// Color of the internal-power timer text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerUrgency {
    Red,
    Amber,
}

impl TimerUrgency {
    pub fn from_remaining(secs: u32) -> Self {
        if secs < TIMER_RED_BELOW {
            Self::Red
        } else {
            Self::Amber
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Red => "var(--eva-red)",
            Self::Amber => "var(--eva-amber)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityStatus {
    Dispersed,
    Condensing,
    CollapseImminent,
}

impl DensityStatus {
    pub fn from_density(density: f64) -> Self {
        if density < DENSITY_CONDENSING_FROM {
            Self::Dispersed
        } else if density < DENSITY_COLLAPSE_FROM {
            Self::Condensing
        } else {
            Self::CollapseImminent
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dispersed => "DISPERSED",
            Self::Condensing => "CONDENSING",
            Self::CollapseImminent => "COLLAPSE IMMINENT",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Dispersed => "stable",
            Self::Condensing => "warning",
            Self::CollapseImminent => "critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternClass {
    Blue,
    Orange,
}

impl PatternClass {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= PATTERN_BLUE_FROM {
            Self::Blue
        } else {
            Self::Orange
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Orange => "ORANGE",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Blue => "critical",
            Self::Orange => "warning",
        }
    }
}
