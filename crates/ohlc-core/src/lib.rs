// File: crates/ohlc-core/src/lib.rs
// Summary: Core library entry point; exports the OHLC window API and renderers.

pub mod bar;
pub mod chart;
pub mod clock;
pub mod grid;
pub mod pixel_render;
pub mod render;
pub mod surface;
pub mod text_render;
pub mod types;
pub mod value;
pub mod window;

pub use bar::Bar;
pub use chart::{ChartConfig, ChartError, OhlcChart};
pub use clock::{Clock, ManualClock, SystemClock};
pub use grid::gridlines;
pub use pixel_render::{BarRender, LineRender};
pub use render::Render;
pub use surface::{Framebuffer, PixelColor, PixelSurface};
pub use text_render::{LineSink, TextRender, WriteSink};
pub use types::Geometry;
pub use value::Sample;
pub use window::Window;
