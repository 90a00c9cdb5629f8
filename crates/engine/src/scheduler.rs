//! Fixed-period tick scheduler.
//!
//! Callers feed it elapsed wall-clock time and it reports how many ticks are
//! due. It keeps the remainder between calls so the long-run rate matches the
//! period regardless of how often it is polled. A stopped scheduler reports no
//! ticks until resumed.

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    period_ms: u32,
    accumulator_ms: u32,
    running: bool,
}

impl TickScheduler {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulator_ms: 0,
            running: true,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Account for `elapsed_ms` of wall-clock time and return the ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.period_ms;
        self.accumulator_ms %= self.period_ms;
        due
    }

    /// Milliseconds until the next tick fires.
    ///
    /// While stopped this is a full period, which suits an input poll timeout.
    pub fn time_until_next_ms(&self) -> u32 {
        if !self.running {
            return self.period_ms;
        }
        self.period_ms - self.accumulator_ms
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0;
    }

    /// Start ticking again; the first tick fires one full period from now.
    pub fn resume(&mut self) {
        self.running = true;
        self.accumulator_ms = 0;
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
