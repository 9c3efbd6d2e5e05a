// File: crates/ohlc-core/src/render.rs
// Summary: Renderer capability driven by the chart once per draw cycle.

use crate::bar::Bar;
use crate::value::Sample;

/// Drawing strategy invoked by `OhlcChart::draw` in fixed order:
/// header, optional grid, each valid bar oldest to newest, footer.
///
/// All operations are fire-and-forget. Variants no-op the operations they
/// do not use, so defaults are provided for everything but `draw_bar`.
pub trait Render<V: Sample> {
    fn draw_header(&mut self) {}

    /// Called only when a grid step is configured, at least one bar is
    /// valid, and the window is not flat (`minimum != maximum`).
    fn draw_grid(&mut self, _minimum: V, _maximum: V, _step: V) {}

    /// `pos` is the absolute window slot index; renderers map it to a
    /// horizontal position themselves.
    fn draw_bar(&mut self, pos: usize, bar: &Bar<V>);

    fn draw_footer(&mut self) {}
}
