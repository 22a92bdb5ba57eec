use crate::constants::*;
use crate::rng;
use rand::Rng;

/// One simulated radio channel: a speaker, a phrase table and a per-tick
/// chance of saying something.
#[derive(Clone, Debug)]
pub struct Channel {
    pub speaker: &'static str,
    pub lines: &'static [&'static str],
    pub chance: f64,
}

impl Channel {
    pub fn ch1() -> Self {
        Self {
            speaker: COMM_CH1_SPEAKER,
            lines: &COMM_CH1_LINES,
            chance: COMM_CH1_CHANCE,
        }
    }

    pub fn ch2() -> Self {
        Self {
            speaker: COMM_CH2_SPEAKER,
            lines: &COMM_CH2_LINES,
            chance: COMM_CH2_CHANCE,
        }
    }

    /// `Some("MISATO K. - Roger.")` with this channel's probability.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        if !rng::chance(rng, self.chance) {
            return None;
        }
        let line = rng::pick(rng, self.lines)?;
        log::debug!("[comms] {}: {}", self.speaker, line);
        Some(format!("{} - {}", self.speaker, line))
    }
}
