// File: crates/ohlc-core/src/pixel_render.rs
// Summary: Candlestick renderers drawing into an optional monochrome surface.

use crate::bar::Bar;
use crate::grid::gridlines;
use crate::render::Render;
use crate::surface::{PixelColor, PixelSurface};
use crate::types::Geometry;
use crate::value::Sample;

/// Dashed horizontal gridlines: one point every `dash_pitch` columns across
/// the full display width, one line per gridline value.
fn draw_gridlines<V: Sample, S: PixelSurface>(
    surface: &mut S,
    geometry: &Geometry,
    minimum: V,
    maximum: V,
    step: V,
) {
    for line in gridlines(minimum, maximum, step) {
        let y = geometry.plot_height - line.to_row();
        let mut x = 0;
        while x <= geometry.width {
            surface.draw_point(x, y, PixelColor::On);
            x += geometry.dash_pitch;
        }
    }
}

/// Line-style candlestick renderer: per bar, a short open tick on the left,
/// a vertical high-low stroke, and a short close tick on the right.
///
/// The surface is externally owned and may be absent; without one, every
/// draw operation is a silent no-op.
pub struct LineRender<S: PixelSurface> {
    surface: Option<S>,
    geometry: Geometry,
}

impl<S: PixelSurface> LineRender<S> {
    pub fn new() -> Self {
        Self { surface: None, geometry: Geometry::default() }
    }

    pub fn with_surface(surface: S) -> Self {
        Self { surface: Some(surface), geometry: Geometry::default() }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

impl<S: PixelSurface> Default for LineRender<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Sample, S: PixelSurface> Render<V> for LineRender<S> {
    fn draw_grid(&mut self, minimum: V, maximum: V, step: V) {
        if let Some(surface) = self.surface.as_mut() {
            draw_gridlines(surface, &self.geometry, minimum, maximum, step);
        }
    }

    fn draw_bar(&mut self, pos: usize, bar: &Bar<V>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let g = &self.geometry;
        let x = g.column(pos);
        let bw = g.body_half_width;
        let h = g.plot_height;

        let y_open = h - bar.open.to_row();
        let y_high = h - bar.high.to_row();
        let y_low = h - bar.low.to_row();
        let y_close = h - bar.close.to_row();

        // open
        surface.draw_line(x, y_open, x + bw, y_open, PixelColor::On);
        // high - low
        surface.draw_line(x + bw, y_high, x + bw, y_low, PixelColor::On);
        // close
        surface.draw_line(x + bw, y_close, x + 2 * bw, y_close, PixelColor::On);
    }
}

/// Filled-bar candlestick renderer: wicks from high/low to the body edges,
/// then the open-close body as a rectangle. Up bars (close >= open) are
/// outlined with a punched-out interior; down bars are solid.
pub struct BarRender<S: PixelSurface> {
    surface: Option<S>,
    geometry: Geometry,
}

impl<S: PixelSurface> BarRender<S> {
    pub fn new() -> Self {
        Self { surface: None, geometry: Geometry::default() }
    }

    pub fn with_surface(surface: S) -> Self {
        Self { surface: Some(surface), geometry: Geometry::default() }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

impl<S: PixelSurface> Default for BarRender<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Sample, S: PixelSurface> Render<V> for BarRender<S> {
    fn draw_grid(&mut self, minimum: V, maximum: V, step: V) {
        if let Some(surface) = self.surface.as_mut() {
            draw_gridlines(surface, &self.geometry, minimum, maximum, step);
        }
    }

    fn draw_bar(&mut self, pos: usize, bar: &Bar<V>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let g = &self.geometry;
        let x = g.column(pos);
        let bw = g.body_half_width;
        let h = g.plot_height;

        let up = bar.close >= bar.open;
        let (top, bottom) = if up { (bar.close, bar.open) } else { (bar.open, bar.close) };

        let y_top = h - top.to_row();
        let y_bottom = h - bottom.to_row();

        // high wick down to the body, low wick up to the body
        surface.draw_line(x + bw, h - bar.high.to_row(), x + bw, y_top, PixelColor::On);
        surface.draw_line(x + bw, h - bar.low.to_row(), x + bw, y_bottom, PixelColor::On);

        // body
        let width = 2 * bw + 1;
        let height = y_bottom - y_top + 1;
        if up {
            surface.draw_rect(x, y_top, width, height, PixelColor::Off, true);
            surface.draw_rect(x, y_top, width, height, PixelColor::On, false);
        } else {
            surface.draw_rect(x, y_top, width, height, PixelColor::On, true);
        }
    }
}
