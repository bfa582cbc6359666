//! Activity monitoring core.
//!
//! - **EventLog**: bounded, timestamped, FIFO-evicting log
//! - **ActivityWatcher**: samples the radio activity signal and records edges
//! - **TickSchedule**: decides when the next sample is due
//!
//! Everything here is pure and host-testable; the radio itself is reached
//! only through [`ActivitySource`].

pub mod event_log;
pub mod schedule;
pub mod watcher;

pub use event_log::{EventLog, LogEntry};
pub use schedule::TickSchedule;
pub use watcher::{ActivityState, ActivityWatcher, Edge};

/// Polled source of the boolean radio activity signal.
///
/// Implementations must answer `false` when the radio state is unknown.
pub trait ActivitySource {
    fn is_active(&self) -> bool;
}

impl<F> ActivitySource for F
where
    F: Fn() -> bool,
{
    fn is_active(&self) -> bool {
        self()
    }
}
