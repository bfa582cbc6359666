//! Read-only render model.
//!
//! The renderer never touches the watcher directly; it receives a
//! [`RenderView`] snapshot built once per state change.

use core::fmt::Write;

use crate::config::MAX_VISIBLE_LOG_LINES;
use crate::monitor::event_log::{EventLog, LogEntry, LogText};
use crate::ui::screen::{max_scroll, ScreenState};
use heapless::{String, Vec};

/// `MM:SS` text (minutes may exceed two digits on long sessions).
pub type Clock = String<20>;

/// One rendered log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewLine {
    pub time: Clock,
    pub text: LogText,
}

impl ViewLine {
    fn from_entry(entry: &LogEntry) -> Self {
        Self {
            time: format_timestamp(entry.timestamp_ms),
            text: entry.text.clone(),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderView {
    pub screen: ScreenState,
    pub uptime_ms: u64,
    pub event_count: u32,
    pub monitoring: bool,
    /// Visible window, oldest first.  Empty means "no events yet".
    pub lines: Vec<ViewLine, MAX_VISIBLE_LOG_LINES>,
    /// More entries exist than fit on screen.
    pub scrollable: bool,
}

/// Format a millisecond timestamp as `MM:SS`.
pub fn format_timestamp(timestamp_ms: u64) -> Clock {
    let secs = timestamp_ms / 1000;
    let mut out = Clock::new();
    let _ = write!(out, "{:02}:{:02}", secs / 60, secs % 60);
    out
}

/// Index range `(start, count)` of the window shown at `scroll_offset`.
///
/// The offset is clamped here as well, so a stale offset never reads
/// before index 0.
pub fn window_bounds(log_len: usize, scroll_offset: u32, visible_lines: usize) -> (usize, usize) {
    let offset = scroll_offset.min(max_scroll(log_len, visible_lines)) as usize;
    let start = log_len.saturating_sub(visible_lines + offset);
    let count = visible_lines.min(log_len - start);
    (start, count)
}

/// Collect the visible log window for `scroll_offset`.
pub fn visible_window<const N: usize>(
    log: &EventLog<N>,
    scroll_offset: u32,
    visible_lines: usize,
) -> Vec<ViewLine, MAX_VISIBLE_LOG_LINES> {
    let visible_lines = visible_lines.min(MAX_VISIBLE_LOG_LINES);
    let (start, count) = window_bounds(log.len(), scroll_offset, visible_lines);
    log.snapshot(start, count)
        .iter()
        .map(ViewLine::from_entry)
        .collect()
}

impl RenderView {
    /// Uptime in whole seconds, as shown in the status line.
    pub fn uptime_secs(&self) -> u64 {
        self.uptime_ms / 1000
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
