// File: crates/ohlc-core/src/bar.rs
// Summary: One OHLC bar: plain open/high/low/close values for a single interval.

use crate::value::Sample;

/// Aggregated open/high/low/close values for one sampling interval.
///
/// The chart maintains the invariants (`low` is the minimum and `high` the
/// maximum of every sample folded into the bar, `open` the first, `close` the
/// most recent); the bar itself is a plain value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar<V: Sample> {
    pub open: V,
    pub high: V,
    pub low: V,
    pub close: V,
}

impl<V: Sample> Bar<V> {
    pub const fn new(open: V, high: V, low: V, close: V) -> Self {
        Self { open, high, low, close }
    }

    /// Bar as it looks the instant it opens: every field equals the
    /// first sample.
    pub const fn opening_at(sample: V) -> Self {
        Self { open: sample, high: sample, low: sample, close: sample }
    }
}
