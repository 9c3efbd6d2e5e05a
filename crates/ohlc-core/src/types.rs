// File: crates/ohlc-core/src/types.rs
// Summary: Shared pixel constants and candlestick layout geometry.

/// Default display width in pixels (Nokia 5110 class panel).
pub const WIDTH: i32 = 84;
/// Default display height in pixels.
pub const HEIGHT: i32 = 48;

/// Pixel layout of the candlestick plot.
///
/// Defaults match the reference 84x48 monochrome panel with 47 usable rows.
/// All fields are presentation constants; changing them does not alter
/// aggregation semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Display width in pixels; gridline dashes span it fully.
    pub width: i32,
    /// Bottom row of the plot; value `v` lands on row `plot_height - v`.
    pub plot_height: i32,
    /// Horizontal position of the first bar column.
    pub first_column: i32,
    /// Horizontal distance between consecutive bar columns.
    pub column_pitch: i32,
    /// Half-width of a candle body; full body is `2 * body_half_width + 1`.
    pub body_half_width: i32,
    /// Column spacing between gridline dash points.
    pub dash_pitch: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: WIDTH,
            plot_height: 47,
            first_column: 5,
            column_pitch: 6,
            body_half_width: 2,
            dash_pitch: 5,
        }
    }
}

impl Geometry {
    /// Left edge of the bar at the given window slot.
    pub const fn column(&self, pos: usize) -> i32 {
        self.first_column + pos as i32 * self.column_pitch
    }
}
