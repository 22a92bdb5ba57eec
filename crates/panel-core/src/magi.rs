//! The three MAGI units shown on the analysis screen.
//!
//! MELCHIOR-1 and BALTHASAR-2 hold a fixed verdict. CASPER-3 rotates through
//! its labels, advancing at random on analysis ticks.

use crate::constants::CASPER_CYCLE_CHANCE;
use crate::rng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MagiLabel {
    Analyzing,
    Approve,
    Deny,
}

impl MagiLabel {
    pub const CYCLE: [MagiLabel; 3] = [MagiLabel::Analyzing, MagiLabel::Approve, MagiLabel::Deny];

    pub const fn text(self) -> &'static str {
        match self {
            Self::Analyzing => "ANALYZING",
            Self::Approve => "APPROVE",
            Self::Deny => "DENY",
        }
    }

    /// Class token: the label lowercased, nothing stripped.
    pub fn class_token(self) -> String {
        self.text().to_lowercase()
    }

    pub fn next(self) -> Self {
        match self {
            Self::Analyzing => Self::Approve,
            Self::Approve => Self::Deny,
            Self::Deny => Self::Analyzing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MagiUnit {
    Melchior,
    Balthasar,
    Casper,
}

impl MagiUnit {
    pub const ALL: [MagiUnit; 3] = [MagiUnit::Melchior, MagiUnit::Balthasar, MagiUnit::Casper];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Melchior => "MELCHIOR-1",
            Self::Balthasar => "BALTHASAR-2",
            Self::Casper => "CASPER-3",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MagiArray {
    melchior: MagiLabel,
    balthasar: MagiLabel,
    casper: MagiLabel,
    cycle_chance: f64,
}

impl MagiArray {
    pub fn new(cycle_chance: f64) -> Self {
        Self {
            melchior: MagiLabel::Approve,
            balthasar: MagiLabel::Approve,
            casper: MagiLabel::Analyzing,
            cycle_chance,
        }
    }

    /// One analysis tick. Returns Casper's new label when it moved.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MagiLabel> {
        if !rng::chance(rng, self.cycle_chance) {
            return None;
        }
        self.casper = self.casper.next();
        log::debug!("[magi] CASPER-3 -> {}", self.casper.text());
        Some(self.casper)
    }

    pub fn label(&self, unit: MagiUnit) -> MagiLabel {
        match unit {
            MagiUnit::Melchior => self.melchior,
            MagiUnit::Balthasar => self.balthasar,
            MagiUnit::Casper => self.casper,
        }
    }
}

impl Default for MagiArray {
    fn default() -> Self {
        Self::new(CASPER_CYCLE_CHANCE)
    }
}
