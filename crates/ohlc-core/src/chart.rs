// File: crates/ohlc-core/src/chart.rs
// Summary: OHLC aggregation state machine over a rolling window plus draw cycle.

use thiserror::Error;

use crate::bar::Bar;
use crate::clock::{Clock, SystemClock};
use crate::render::Render;
use crate::value::Sample;
use crate::window::Window;

/// Construction-time misconfiguration. Runtime operations never fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    #[error("window capacity must be at least one bar")]
    InvalidCapacity,
    #[error("bar interval must be a positive number of milliseconds")]
    InvalidInterval,
}

/// Construction-time chart configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    /// Number of bars kept in the rolling window; fixed for the chart's
    /// lifetime.
    pub capacity: usize,
    /// Duration of one bar in milliseconds.
    pub interval_ms: u64,
}

impl ChartConfig {
    pub const fn new(capacity: usize, interval_ms: u64) -> Self {
        Self { capacity, interval_ms }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        // 13 columns of 6 px fill an 84 px display; 10 s bars.
        Self { capacity: 13, interval_ms: 10_000 }
    }
}

/// Rolling-window OHLC recorder and renderer driver.
///
/// Samples are pushed in one at a time; each either extends the bar under
/// aggregation or, once the interval deadline has passed, shifts the window
/// and opens a new bar. `draw` walks the valid bars and drives the renderer.
///
/// Single-threaded by design: `ingest` and `draw` run to completion on the
/// calling thread and must be serialized by the caller.
pub struct OhlcChart<V: Sample, R: Render<V>, C: Clock = SystemClock> {
    window: Window<V>,
    interval_ms: u64,
    /// Absolute time the current bar closes; `None` until the first sample
    /// arrives, so the first ingest always opens a bar.
    deadline_ms: Option<u64>,
    grid_step: Option<V>,
    render: R,
    clock: C,
}

impl<V: Sample, R: Render<V>> OhlcChart<V, R> {
    /// Chart on the system clock, anchored at construction.
    pub fn new(config: ChartConfig, render: R) -> Result<Self, ChartError> {
        Self::with_clock(config, render, SystemClock::default())
    }
}

impl<V: Sample, R: Render<V>, C: Clock> OhlcChart<V, R, C> {
    pub fn with_clock(config: ChartConfig, render: R, clock: C) -> Result<Self, ChartError> {
        if config.capacity == 0 {
            return Err(ChartError::InvalidCapacity);
        }
        if config.interval_ms == 0 {
            return Err(ChartError::InvalidInterval);
        }
        Ok(Self {
            window: Window::new(config.capacity),
            interval_ms: config.interval_ms,
            deadline_ms: None,
            grid_step: None,
            render,
            clock,
        })
    }

    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Value-axis spacing for horizontal gridlines; a non-positive step
    /// disables the grid for subsequent draw cycles.
    pub fn set_grid_step(&mut self, step: V) {
        self.grid_step = step.is_positive().then_some(step);
    }

    /// Valid bars oldest to newest, with their absolute slot indices.
    pub fn bars(&self) -> impl Iterator<Item = (usize, &Bar<V>)> {
        self.window.valid()
    }

    /// Fold one sample into the chart. Returns `true` when the sample opened
    /// a new bar (always the case for the very first sample).
    pub fn ingest(&mut self, sample: V) -> bool {
        let now = self.clock.now_ms();
        let rolled = match self.deadline_ms {
            None => true,
            Some(deadline) => now > deadline,
        };
        if rolled {
            self.window.roll(sample);
            // Fixed-step scheduling: advance from the previous deadline, not
            // from `now`, so late polls never accumulate drift.
            self.deadline_ms = Some(self.deadline_ms.unwrap_or(0) + self.interval_ms);
        } else {
            let bar = self.window.current_mut();
            if bar.high < sample {
                bar.high = sample;
            }
            if bar.low > sample {
                bar.low = sample;
            }
            bar.close = sample;
        }
        rolled
    }

    /// One draw cycle: header, grid (when configured and the visible range
    /// is not flat), every valid bar oldest to newest, footer.
    pub fn draw(&mut self) {
        self.render.draw_header();
        if let Some(step) = self.grid_step {
            if let Some((minimum, maximum)) = self.window.value_range() {
                if minimum != maximum {
                    self.render.draw_grid(minimum, maximum, step);
                }
            }
        }
        for (pos, bar) in self.window.valid() {
            self.render.draw_bar(pos, bar);
        }
        self.render.draw_footer();
    }
}
