// File: crates/ohlc-core/src/text_render.rs
// Summary: Text-stream renderer emitting one comma-separated record per bar.

use std::io;

use crate::bar::Bar;
use crate::render::Render;
use crate::value::Sample;

/// Line-oriented character output capability.
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

/// Collecting sink, handy in tests and for deferred output.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Adapter turning any `io::Write` into a `LineSink`. Write errors are
/// swallowed; the text stream is fire-and-forget like every other sink.
pub struct WriteSink<W: io::Write>(pub W);

impl<W: io::Write> LineSink for WriteSink<W> {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.0, "{line}");
    }
}

/// Renderer that serializes each draw cycle as text: a `###` delimiter
/// header followed by `index,open,high,low,close` records.
pub struct TextRender<S: LineSink> {
    sink: S,
}

impl<S: LineSink> TextRender<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<V: Sample, S: LineSink> Render<V> for TextRender<S> {
    fn draw_header(&mut self) {
        self.sink.write_line("###");
    }

    fn draw_bar(&mut self, pos: usize, bar: &Bar<V>) {
        self.sink
            .write_line(&format!("{},{},{},{},{}", pos, bar.open, bar.high, bar.low, bar.close));
    }
}
