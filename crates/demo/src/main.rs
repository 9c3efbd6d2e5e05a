// File: crates/demo/src/main.rs
// Summary: Demo feeds a deterministic random walk through two charts and
// prints the text records plus an ASCII dump of the framebuffer rendering.

use anyhow::Result;
use ohlc_core::{
    BarRender, ChartConfig, Framebuffer, ManualClock, OhlcChart, TextRender, WriteSink,
};

/// Small deterministic PRNG so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Random walk step in {-1, 0, 1}.
    fn step(&mut self) -> i32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % 3) as i32 - 1
    }
}

fn main() -> Result<()> {
    // Simulated time shared by both charts: 1 s bars, 13 bars fill the
    // 84 px panel at the default 6 px column pitch.
    let clock = ManualClock::new();
    let config = ChartConfig::new(13, 1_000);

    let mut text = OhlcChart::with_clock(
        config,
        TextRender::new(WriteSink(std::io::stdout())),
        clock.clone(),
    )?;
    let mut candles = OhlcChart::with_clock(
        config,
        BarRender::with_surface(Framebuffer::default()),
        clock.clone(),
    )?;
    candles.set_grid_step(10);

    let mut rng = Lcg::new(0x5eed);
    let mut price: i32 = 24;
    for tick in 0..13_000u64 {
        clock.set(tick);
        price = (price + rng.step()).clamp(2, 45);
        text.ingest(price);
        candles.ingest(price);
    }

    text.draw();
    candles.draw();

    if let Some(fb) = candles.render().surface() {
        print!("{}", fb.ascii());
    }
    Ok(())
}
