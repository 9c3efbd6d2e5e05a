// File: crates/ohlc-core/src/window.rs
// Summary: Fixed-capacity shift-left window of bars with a first-valid cursor.

use crate::bar::Bar;
use crate::value::Sample;

/// Ordered, fixed-capacity sequence of the most recent bars.
///
/// Index 0 is oldest, index `capacity - 1` is the bar currently being
/// aggregated. Storage is allocated once; rolling overwrites the oldest
/// slot in place. `first_valid` counts the leading slots never populated
/// since construction; those must not be rendered or scanned.
#[derive(Clone, Debug)]
pub struct Window<V: Sample> {
    slots: Box<[Bar<V>]>,
    first_valid: usize,
}

impl<V: Sample> Window<V> {
    /// Capacity must be validated by the caller (see `ChartConfig`).
    pub(crate) fn new(capacity: usize) -> Self {
        let slots = vec![Bar::opening_at(V::ZERO); capacity].into_boxed_slice();
        Self { first_valid: capacity, slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the oldest populated slot; equals `capacity` while empty.
    pub fn first_valid(&self) -> usize {
        self.first_valid
    }

    pub fn is_empty(&self) -> bool {
        self.first_valid == self.slots.len()
    }

    /// Shift one slot toward the oldest end and open a fresh bar at the
    /// newest slot. The previous oldest bar is discarded.
    pub(crate) fn roll(&mut self, sample: V) {
        if self.first_valid > 0 {
            self.first_valid -= 1;
        }
        let last = self.slots.len() - 1;
        self.slots.copy_within(1.., 0);
        self.slots[last] = Bar::opening_at(sample);
    }

    /// The bar currently being aggregated (newest slot).
    pub(crate) fn current_mut(&mut self) -> &mut Bar<V> {
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }

    /// Valid bars oldest to newest, with their absolute slot indices.
    pub fn valid(&self) -> impl Iterator<Item = (usize, &Bar<V>)> {
        self.slots.iter().enumerate().skip(self.first_valid)
    }

    /// Minimum low and maximum high across all valid bars, if any.
    pub fn value_range(&self) -> Option<(V, V)> {
        let mut bars = self.valid().map(|(_, bar)| bar);
        let first = bars.next()?;
        let mut minimum = first.low;
        let mut maximum = first.high;
        for bar in bars {
            if bar.low < minimum {
                minimum = bar.low;
            }
            if bar.high > maximum {
                maximum = bar.high;
            }
        }
        Some((minimum, maximum))
    }
}
