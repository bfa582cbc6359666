//! Activity edge detector.
//!
//! The watcher owns the event log and turns consecutive samples of the
//! radio activity signal into log lines:
//!
//! - false → true: `ACTIVITY_DETECTED_TEXT`, `event_count += 1`
//! - true → false: `ACTIVITY_ENDED_TEXT`
//!
//! Samples are only evaluated while monitoring.  Each `start()` opens a new
//! session: the log, the counter and the edge memory are reset and
//! timestamps restart from zero.

use crate::config::{ACTIVITY_DETECTED_TEXT, ACTIVITY_ENDED_TEXT};
use crate::monitor::event_log::{EventLog, LogEntry};

/// Observable watcher state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityState {
    /// Last sampled value of the signal.
    pub is_active: bool,
    /// Rising edges seen in the current session.
    pub event_count: u32,
    /// Monotonic ms at which the current session started.
    pub start_time: u64,
    /// Whether ticks are currently evaluated.
    pub monitoring: bool,
}

/// Direction of a detected transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    fn between(was_active: bool, is_active: bool) -> Option<Self> {
        match (was_active, is_active) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        }
    }

    fn log_text(self) -> &'static str {
        match self {
            Edge::Rising => ACTIVITY_DETECTED_TEXT,
            Edge::Falling => ACTIVITY_ENDED_TEXT,
        }
    }
}

/// Edge detector and sole writer of the event log.
pub struct ActivityWatcher<const N: usize> {
    state: ActivityState,
    was_active: bool,
    log: EventLog<N>,
}

impl<const N: usize> ActivityWatcher<N> {
    /// Create an idle watcher; `now` anchors timestamps until the first `start()`.
    pub const fn new(now: u64) -> Self {
        Self {
            state: ActivityState {
                is_active: false,
                event_count: 0,
                start_time: now,
                monitoring: false,
            },
            was_active: false,
            log: EventLog::new(),
        }
    }

    /// Evaluate one sample of the activity signal.
    ///
    /// Returns the entry written when the sample is an edge, `None` when
    /// nothing changed or monitoring is stopped.
    pub fn tick(&mut self, signal: bool, now: u64) -> Option<&LogEntry> {
        if !self.state.monitoring {
            return None;
        }

        let edge = Edge::between(self.was_active, signal);
        self.was_active = signal;
        self.state.is_active = signal;

        let edge = edge?;
        if edge == Edge::Rising {
            self.state.event_count = self.state.event_count.saturating_add(1);
        }
        let elapsed = self.elapsed(now);
        Some(self.log.append(edge.log_text(), elapsed))
    }

    /// Begin a new session at `now`.
    pub fn start(&mut self, now: u64) {
        self.state = ActivityState {
            is_active: false,
            event_count: 0,
            start_time: now,
            monitoring: true,
        };
        self.was_active = false;
        self.log.clear();
    }

    /// Stop evaluating ticks.  The log and counters are kept.
    pub fn stop(&mut self) {
        self.state.monitoring = false;
    }

    /// Append a free-form line without touching counters or edge state.
    pub fn note(&mut self, text: &str, now: u64) -> &LogEntry {
        let elapsed = self.elapsed(now);
        self.log.append(text, elapsed)
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn is_monitoring(&self) -> bool {
        self.state.monitoring
    }

    pub fn event_count(&self) -> u32 {
        self.state.event_count
    }

    pub fn log(&self) -> &EventLog<N> {
        &self.log
    }

    /// Milliseconds since the current session started.
    pub fn uptime_ms(&self, now: u64) -> u64 {
        self.elapsed(now)
    }

    fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.state.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_between_samples() {
        assert_eq!(Edge::between(false, true), Some(Edge::Rising));
        assert_eq!(Edge::between(true, false), Some(Edge::Falling));
        assert_eq!(Edge::between(true, true), None);
        assert_eq!(Edge::between(false, false), None);
    }

    #[test]
    fn timestamps_are_relative_to_session_start() {
        let mut watcher: ActivityWatcher<8> = ActivityWatcher::new(0);
        watcher.start(10_000);
        let entry = watcher.tick(true, 12_500).cloned();
        assert_eq!(entry.map(|e| e.timestamp_ms), Some(2_500));
    }
}
