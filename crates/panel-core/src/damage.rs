use crate::constants::DAMAGE_PARTS;
use crate::rng;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Severe,
        Severity::Critical,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Moderate => "MODERATE",
            Self::Severe => "SEVERE",
            Self::Critical => "CRITICAL",
        }
    }

    /// Class attribute of the damage status element.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Minor => "value minor",
            Self::Moderate => "value moderate",
            Self::Severe => "value severe",
            Self::Critical => "value critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub part: &'static str,
    pub severity: Severity,
}

impl DamageReport {
    /// With probability `chance`, a uniformly chosen part and severity.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> Option<Self> {
        if !rng::chance(rng, chance) {
            return None;
        }
        let part = *rng::pick(rng, &DAMAGE_PARTS)?;
        let severity = *rng::pick(rng, &Severity::ALL)?;
        log::debug!("[damage] {} {}", part, severity.label());
        Some(Self { part, severity })
    }

    pub fn log_message(&self) -> String {
        format!("DAMAGE DETECTED: {}", self)
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.part, self.severity.label())
    }
}
