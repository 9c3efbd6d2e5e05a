// File: crates/ohlc-core/src/clock.rs
// Summary: Monotonic clock capability with system and manually-driven sources.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time source read by the chart to detect bar boundaries.
/// Readings must never jump backward.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock source anchored at construction, counting elapsed milliseconds.
#[derive(Clone, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replay hosts. Clones share the same
/// underlying time, so a host can keep a handle while the chart owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
