//! Bounded, newest-first alert log.

use crate::format::WallClock;
use std::collections::VecDeque;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogKind {
    Sys,
    Op,
    Warning,
    Critical,
}

impl LogKind {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sys => "log-entry sys",
            Self::Op => "log-entry op",
            Self::Warning => "log-entry warning",
            Self::Critical => "log-entry critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub stamp: WallClock,
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stamp, self.message)
    }
}

/// Keeps the most recent `capacity` entries, newest at the front.
///
/// Entries pushed since the last [`LogBook::take_unrendered`] call are
/// tracked so a display can prepend only what changed.
#[derive(Clone, Debug)]
pub struct LogBook {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    unrendered: usize,
}

impl LogBook {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            unrendered: 0,
        }
    }

    /// Insert as newest. Returns the evicted oldest entry once over capacity.
    pub fn push(
        &mut self,
        stamp: WallClock,
        kind: LogKind,
        message: impl Into<String>,
    ) -> Option<LogEntry> {
        self.entries.push_front(LogEntry {
            stamp,
            kind,
            message: message.into(),
        });
        self.unrendered = (self.unrendered + 1).min(self.capacity);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn oldest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries added since the previous call, oldest first, so prepending
    /// them in order leaves the newest on top.
    pub fn take_unrendered(&mut self) -> Vec<LogEntry> {
        let n = self.unrendered.min(self.entries.len());
        self.unrendered = 0;
        self.entries.iter().take(n).rev().cloned().collect()
    }
}
