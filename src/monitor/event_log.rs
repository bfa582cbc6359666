//! Fixed-capacity, timestamped event log.
//!
//! Entries live in a `heapless::Vec` sized by the const generic `N`.
//! When the log is full, the oldest entry (index 0) is dropped and the
//! remaining entries shift down before the new one is pushed at the tail.
//! `N` is small, so the O(N) shift is cheaper than keeping a ring index.

use crate::config::LOG_TEXT_CAPACITY;
use heapless::{String, Vec};

/// Bounded text of a single log line.
pub type LogText = String<LOG_TEXT_CAPACITY>;

/// One immutable log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogEntry {
    /// Message, truncated to `LOG_TEXT_CAPACITY` bytes.
    pub text: LogText,
    /// Milliseconds since the current monitoring session started.
    pub timestamp_ms: u64,
}

impl LogEntry {
    /// Build an entry, silently truncating `text` on a char boundary.
    pub fn new(text: &str, timestamp_ms: u64) -> Self {
        Self {
            text: truncate(text),
            timestamp_ms,
        }
    }
}

fn truncate(text: &str) -> LogText {
    let mut out = LogText::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Sliding-window log holding at most `N` entries in insertion order.
#[derive(Clone, Debug, Default)]
pub struct EventLog<const N: usize> {
    entries: Vec<LogEntry, N>,
}

impl<const N: usize> EventLog<N> {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a line, evicting the oldest entry first when full.
    pub fn append(&mut self, text: &str, timestamp_ms: u64) -> &LogEntry {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        // Cannot fail: a slot was freed above if the log was full.
        let _ = self.entries.push(LogEntry::new(text, timestamp_ms));
        &self.entries[self.entries.len() - 1]
    }

    /// Read-only view of `count` entries starting at `start`.
    ///
    /// Out-of-range requests are cut down to what exists, so this never
    /// panics.
    pub fn snapshot(&self, start: usize, count: usize) -> &[LogEntry] {
        let len = self.entries.len();
        let start = start.min(len);
        let end = start.saturating_add(count).min(len);
        &self.entries[start..end]
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}
