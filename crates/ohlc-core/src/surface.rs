// File: crates/ohlc-core/src/surface.rs
// Summary: Monochrome pixel-surface capability and an in-memory framebuffer.

use crate::types::{HEIGHT, WIDTH};

/// Two-color state of a monochrome pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelColor {
    /// Background.
    Off,
    /// Foreground.
    On,
}

/// Drawing capability over a fixed-size monochrome canvas.
///
/// Coordinates outside the canvas are clipped, never faulted. Line and
/// rectangle endpoints are inclusive.
pub trait PixelSurface {
    fn draw_point(&mut self, x: i32, y: i32, color: PixelColor);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PixelColor);
    /// Rectangle from top-left `(x, y)` spanning `w` by `h` pixels; outline
    /// only unless `filled`. Non-positive extents draw nothing.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: PixelColor, filled: bool);
}

impl<T: PixelSurface + ?Sized> PixelSurface for &mut T {
    fn draw_point(&mut self, x: i32, y: i32, color: PixelColor) {
        (**self).draw_point(x, y, color);
    }
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PixelColor) {
        (**self).draw_line(x0, y0, x1, y1, color);
    }
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: PixelColor, filled: bool) {
        (**self).draw_rect(x, y, w, h, color, filled);
    }
}

/// Owned in-memory monochrome canvas.
///
/// Stands in for a hardware display driver: hosts draw into it through
/// `PixelSurface` and flush however they like (the demo dumps ASCII).
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Framebuffer {
    /// Non-positive dimensions are clamped to zero (empty canvas).
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self { width, height, pixels: vec![false; (width * height) as usize] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Pixel state; out-of-range coordinates read as background.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// One text row per pixel row, `#` for foreground and `.` for background.
    pub fn ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    fn set(&mut self, x: i32, y: i32, color: PixelColor) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color == PixelColor::On;
    }
}

impl PixelSurface for Framebuffer {
    fn draw_point(&mut self, x: i32, y: i32, color: PixelColor) {
        self.set(x, y, color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PixelColor) {
        // Bresenham, endpoints inclusive.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: PixelColor, filled: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x1, y1) = (x + w - 1, y + h - 1);
        if filled {
            for yy in y..=y1 {
                for xx in x..=x1 {
                    self.set(xx, yy, color);
                }
            }
        } else {
            self.draw_line(x, y, x1, y, color);
            self.draw_line(x, y1, x1, y1, color);
            self.draw_line(x, y, x, y1, color);
            self.draw_line(x1, y, x1, y1, color);
        }
    }
}
