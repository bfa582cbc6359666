/// Fixed-period tick gate for the cooperative main loop.
///
/// The loop wakes far more often than the sampling period (every input
/// event or poll timeout); `due` tells it when a tick should actually run.
/// After a stall the next tick is re-armed from `now`, so missed periods
/// are skipped instead of replayed in a burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    period_ms: u64,
    next_due: u64,
}

impl TickSchedule {
    /// First tick fires one period after `now`.
    pub const fn new(period_ms: u64, now: u64) -> Self {
        Self {
            period_ms,
            next_due: now.saturating_add(period_ms),
        }
    }

    /// Returns `true` at most once per period.
    pub fn due(&mut self, now: u64) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now.saturating_add(self.period_ms);
        true
    }

    /// Re-arm so the next tick lands one full period after `now`.
    pub fn reset(&mut self, now: u64) {
        self.next_due = now.saturating_add(self.period_ms);
    }

    /// Milliseconds until the next tick (0 if already due).
    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.next_due.saturating_sub(now)
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}
