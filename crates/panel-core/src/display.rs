//! Output surface: named display regions and the sink that writes them.
//!
//! The presentation layer (markup + stylesheet) owns the elements; the panel
//! only pushes text, classes and inline styles into them.

use crate::logbook::{LogBook, LogEntry};
use fnv::FnvHashMap;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    // tactical screen
    SyncRatio,
    SyncStatus,
    PlugDepth,
    AtFieldStrength,
    AtFieldStatus,
    PowerStatus,
    InternalTimer,
    BatteryBar,
    DamageStatus,
    TargetDistance,
    AlertLog,
    CommCh1,
    CommCh2,
    SystemTime,
    // analysis screen
    SphereDiameter,
    ShadowDensity,
    DensityStatus,
    PatternConfidence,
    TargetPattern,
    MissionCountdown,
    MagiMelchior,
    MagiBalthasar,
    MagiCasper,
    AnalysisLog,
    AnalysisTime,
}

impl Region {
    pub const TACTICAL: [Region; 14] = [
        Region::SyncRatio,
        Region::SyncStatus,
        Region::PlugDepth,
        Region::AtFieldStrength,
        Region::AtFieldStatus,
        Region::PowerStatus,
        Region::InternalTimer,
        Region::BatteryBar,
        Region::DamageStatus,
        Region::TargetDistance,
        Region::AlertLog,
        Region::CommCh1,
        Region::CommCh2,
        Region::SystemTime,
    ];

    pub const ANALYSIS: [Region; 11] = [
        Region::SphereDiameter,
        Region::ShadowDensity,
        Region::DensityStatus,
        Region::PatternConfidence,
        Region::TargetPattern,
        Region::MissionCountdown,
        Region::MagiMelchior,
        Region::MagiBalthasar,
        Region::MagiCasper,
        Region::AnalysisLog,
        Region::AnalysisTime,
    ];

    /// DOM id of the element backing this region.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::SyncRatio => "sync-ratio",
            Self::SyncStatus => "sync-status",
            Self::PlugDepth => "plug-depth",
            Self::AtFieldStrength => "at-field-strength",
            Self::AtFieldStatus => "at-field-status",
            Self::PowerStatus => "power-status",
            Self::InternalTimer => "internal-timer",
            Self::BatteryBar => "battery-bar",
            Self::DamageStatus => "damage-status",
            Self::TargetDistance => "target-distance",
            Self::AlertLog => "alert-log",
            Self::CommCh1 => "comm-ch1",
            Self::CommCh2 => "comm-ch2",
            Self::SystemTime => "system-time",
            Self::SphereDiameter => "sphere-diameter",
            Self::ShadowDensity => "shadow-density",
            Self::DensityStatus => "density-status",
            Self::PatternConfidence => "pattern-confidence",
            Self::TargetPattern => "target-pattern",
            Self::MissionCountdown => "mission-countdown",
            Self::MagiMelchior => "magi-melchior",
            Self::MagiBalthasar => "magi-balthasar",
            Self::MagiCasper => "magi-casper",
            Self::AnalysisLog => "analysis-log",
            Self::AnalysisTime => "analysis-time",
        }
    }
}

/// Write capability over the display regions.
pub trait DisplaySink {
    fn set_text(&mut self, region: Region, text: &str);
    /// Replace the whole class attribute.
    fn set_class(&mut self, region: Region, class: &str);
    /// Add one class token, keeping the others.
    fn add_class(&mut self, region: Region, token: &str);
    fn set_style(&mut self, region: Region, property: &str, value: &str);
    /// Insert an entry above the current first one.
    fn prepend_log(&mut self, region: Region, entry: &LogEntry);
    /// Drop entries from the bottom until at most `keep` remain.
    fn trim_log(&mut self, region: Region, keep: usize);
}

/// Prepend entries added since the last flush, then trim to capacity.
pub fn flush_log(log: &mut LogBook, region: Region, sink: &mut dyn DisplaySink) {
    let fresh = log.take_unrendered();
    if fresh.is_empty() {
        return;
    }
    for entry in &fresh {
        sink.prepend_log(region, entry);
    }
    sink.trim_log(region, log.capacity());
}

/// A rendered log line as the sink saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub class: String,
    pub text: String,
}

/// In-memory sink used by tests and the native driver.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    texts: FnvHashMap<Region, String>,
    classes: FnvHashMap<Region, String>,
    styles: FnvHashMap<(Region, String), String>,
    logs: FnvHashMap<Region, VecDeque<LogLine>>,
    writes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    pub fn class(&self, region: Region) -> Option<&str> {
        self.classes.get(&region).map(String::as_str)
    }

    pub fn style(&self, region: Region, property: &str) -> Option<&str> {
        self.styles
            .get(&(region, property.to_string()))
            .map(String::as_str)
    }

    /// Top to bottom, newest first.
    pub fn log(&self, region: Region) -> Vec<LogLine> {
        self.logs
            .get(&region)
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total number of write calls received.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, region: Region, text: &str) {
        self.writes += 1;
        self.texts.insert(region, text.to_string());
    }

    fn set_class(&mut self, region: Region, class: &str) {
        self.writes += 1;
        self.classes.insert(region, class.to_string());
    }

    fn add_class(&mut self, region: Region, token: &str) {
        self.writes += 1;
        let cur = self.classes.entry(region).or_default();
        if cur.split_whitespace().any(|t| t == token) {
            return;
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(token);
    }

    fn set_style(&mut self, region: Region, property: &str, value: &str) {
        self.writes += 1;
        self.styles
            .insert((region, property.to_string()), value.to_string());
    }

    fn prepend_log(&mut self, region: Region, entry: &LogEntry) {
        self.writes += 1;
        self.logs.entry(region).or_default().push_front(LogLine {
            class: entry.kind.class().to_string(),
            text: entry.text(),
        });
    }

    fn trim_log(&mut self, region: Region, keep: usize) {
        self.writes += 1;
        if let Some(lines) = self.logs.get_mut(&region) {
            lines.truncate(keep);
        }
    }
}
