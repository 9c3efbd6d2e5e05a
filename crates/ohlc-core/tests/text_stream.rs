// File: crates/ohlc-core/tests/text_stream.rs
// Purpose: Validate the text-stream renderer's record format and a full
// draw cycle through a collecting sink.

use ohlc_core::{Bar, ChartConfig, ManualClock, OhlcChart, Render, TextRender, WriteSink};

#[test]
fn bar_record_is_index_then_ohlc() {
    let mut render = TextRender::new(Vec::new());
    render.draw_bar(2, &Bar::new(1, 5, 0, 3));
    assert_eq!(render.sink().as_slice(), ["2,1,5,0,3"]);
}

#[test]
fn header_is_a_fixed_delimiter_line() {
    let mut render = TextRender::new(Vec::new());
    Render::<i32>::draw_header(&mut render);
    assert_eq!(render.sink().as_slice(), ["###"]);
}

#[test]
fn grid_and_footer_emit_nothing() {
    let mut render = TextRender::new(Vec::new());
    render.draw_grid(0, 10, 2);
    Render::<i32>::draw_footer(&mut render);
    assert!(render.sink().is_empty());
}

#[test]
fn draw_cycle_emits_delimited_records() {
    let clock = ManualClock::new();
    let mut chart = OhlcChart::with_clock(
        ChartConfig::new(3, 10),
        TextRender::new(Vec::new()),
        clock.clone(),
    )
    .expect("valid config");

    clock.set(0);
    chart.ingest(10);
    clock.set(11);
    chart.ingest(12);
    clock.set(12);
    chart.ingest(8);

    chart.draw();
    chart.draw();

    let lines = chart.render().sink();
    assert_eq!(
        lines.as_slice(),
        [
            "###",
            "1,10,10,10,10",
            "2,12,12,8,8",
            "###",
            "1,10,10,10,10",
            "2,12,12,8,8",
        ]
    );
}

#[test]
fn write_sink_appends_newlines() {
    let mut render = TextRender::new(WriteSink(Vec::<u8>::new()));
    Render::<i32>::draw_header(&mut render);
    render.draw_bar(0, &Bar::new(7, 9, 6, 8));
    assert_eq!(render.sink().0, b"###\n0,7,9,6,8\n");
}

#[test]
fn float_records_format_naturally() {
    let mut render = TextRender::new(Vec::new());
    render.draw_bar(1, &Bar::new(1.5f64, 5.0, 0.25, 3.0));
    assert_eq!(render.sink().as_slice(), ["1,1.5,5,0.25,3"]);
}
