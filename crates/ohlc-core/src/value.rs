// File: crates/ohlc-core/src/value.rs
// Summary: Numeric capability trait for chart values (integer or floating point).

use std::fmt::Display;

/// Numeric type a chart aggregates, chosen uniformly per chart.
///
/// Implemented for the common integer and floating-point widths. The grid
/// anchor uses truncation toward zero (integer-division semantics), which
/// differs from floor for negative minima; `gridline` tests pin that behavior.
pub trait Sample: Copy + PartialOrd + Display {
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;

    /// Largest multiple of `step` obtained by truncating `self / step`
    /// toward zero. Gridlines are anchored at multiples of the step, not
    /// at the scanned minimum itself.
    fn grid_anchor(self, step: Self) -> Self;

    /// Truncating conversion to a pixel row offset.
    fn to_row(self) -> i32;

    fn is_positive(self) -> bool {
        self > Self::ZERO
    }
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0;
            fn add(self, rhs: Self) -> Self { self + rhs }
            fn grid_anchor(self, step: Self) -> Self { (self / step) * step }
            fn to_row(self) -> i32 { self as i32 }
        }
    )*};
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0.0;
            fn add(self, rhs: Self) -> Self { self + rhs }
            fn grid_anchor(self, step: Self) -> Self { (self / step).trunc() * step }
            fn to_row(self) -> i32 { self as i32 }
        }
    )*};
}

impl_sample_int!(i16, i32, i64);
impl_sample_float!(f32, f64);
