//! Text formatting for display regions.

use std::fmt;

/// `73.456` at one decimal -> `"73.5%"`.
pub fn fixed_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Integer gauge as a percentage, `95.0` -> `"95%"`.
pub fn int_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// `145.8` -> `"145.8 M"`.
pub fn meters(value: f64) -> String {
    format!("{:.1} M", value)
}

/// Floored target range, `1187.9` -> `"DIST: 1187 M"`.
pub fn distance(value: f64) -> String {
    format!("DIST: {} M", value.floor() as i64)
}

/// `125` -> `"02:05"`. Minutes are padded, never truncated.
pub fn mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// CSS width value for a progress bar.
pub fn width_percent(level: f64) -> String {
    format!("{}%", level)
}

/// Local wall-clock time of day, rendered `HH:MM:SS` (24h).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl WallClock {
    pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Wraps at midnight.
    pub fn from_seconds_of_day(secs: u64) -> Self {
        let s = secs % Self::SECONDS_PER_DAY;
        Self {
            hours: (s / 3600) as u8,
            minutes: ((s / 60) % 60) as u8,
            seconds: (s % 60) as u8,
        }
    }

    pub fn seconds_of_day(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    pub fn advanced(&self, secs: u64) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + secs)
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Header clock text, `"// SYS TIME: 14:03:09 //"`.
pub fn system_time_banner(clock: WallClock) -> String {
    format!("// SYS TIME: {} //", clock)
}
