// File: crates/ohlc-core/src/grid.rs
// Summary: Horizontal gridline layout over the visible value range.

use crate::value::Sample;

/// Gridline values for the range `[minimum, maximum]` at the given step.
///
/// The first line sits at `trunc(minimum / step) * step` and lines advance
/// by `step` while below `maximum + step`. Truncation is toward zero, so a
/// negative minimum anchors above itself rather than at the floor multiple.
/// A non-positive step yields no lines.
pub fn gridlines<V: Sample>(minimum: V, maximum: V, step: V) -> Vec<V> {
    let mut lines = Vec::new();
    if !step.is_positive() {
        return lines;
    }
    let bound = maximum.add(step);
    let mut line = minimum.grid_anchor(step);
    while line < bound {
        lines.push(line);
        line = line.add(step);
    }
    lines
}
