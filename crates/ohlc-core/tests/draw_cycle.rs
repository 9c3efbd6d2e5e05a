// File: crates/ohlc-core/tests/draw_cycle.rs
// Purpose: Validate draw-cycle ordering and the grid gating rules
// (step configured, window non-empty, visible range not flat).

use ohlc_core::{Bar, ChartConfig, ManualClock, OhlcChart, Render};

#[derive(Debug, PartialEq)]
enum Event {
    Header,
    Grid { minimum: i32, maximum: i32, step: i32 },
    Bar { pos: usize, open: i32, close: i32 },
    Footer,
}

#[derive(Default)]
struct RecordingRender {
    events: Vec<Event>,
}

impl Render<i32> for RecordingRender {
    fn draw_header(&mut self) {
        self.events.push(Event::Header);
    }
    fn draw_grid(&mut self, minimum: i32, maximum: i32, step: i32) {
        self.events.push(Event::Grid { minimum, maximum, step });
    }
    fn draw_bar(&mut self, pos: usize, bar: &Bar<i32>) {
        self.events.push(Event::Bar { pos, open: bar.open, close: bar.close });
    }
    fn draw_footer(&mut self) {
        self.events.push(Event::Footer);
    }
}

fn chart() -> (OhlcChart<i32, RecordingRender, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let chart = OhlcChart::with_clock(
        ChartConfig::new(3, 10),
        RecordingRender::default(),
        clock.clone(),
    )
    .expect("valid config");
    (chart, clock)
}

#[test]
fn header_grid_bars_footer_in_order() {
    let (mut chart, clock) = chart();
    chart.set_grid_step(5);

    clock.set(0);
    chart.ingest(3); // low of the window
    clock.set(11);
    chart.ingest(17); // high of the window
    chart.draw();

    assert_eq!(
        chart.render().events,
        vec![
            Event::Header,
            Event::Grid { minimum: 3, maximum: 17, step: 5 },
            Event::Bar { pos: 1, open: 3, close: 3 },
            Event::Bar { pos: 2, open: 17, close: 17 },
            Event::Footer,
        ]
    );
}

#[test]
fn empty_window_draws_only_header_and_footer() {
    let (mut chart, _clock) = chart();
    chart.set_grid_step(5);
    chart.draw();
    assert_eq!(chart.render().events, vec![Event::Header, Event::Footer]);
}

#[test]
fn flat_window_skips_grid() {
    // Single bar with open = high = low = close: minimum == maximum.
    let (mut chart, _clock) = chart();
    chart.set_grid_step(5);
    chart.ingest(100);
    chart.draw();
    assert_eq!(
        chart.render().events,
        vec![
            Event::Header,
            Event::Bar { pos: 2, open: 100, close: 100 },
            Event::Footer,
        ]
    );
}

#[test]
fn unset_or_non_positive_step_disables_grid() {
    let (mut chart, clock) = chart();
    clock.set(0);
    chart.ingest(3);
    clock.set(11);
    chart.ingest(17);

    chart.draw();
    assert!(!chart.render().events.iter().any(|e| matches!(e, Event::Grid { .. })));

    chart.render_mut().events.clear();
    chart.set_grid_step(5);
    chart.set_grid_step(0); // disable again
    chart.draw();
    assert!(!chart.render().events.iter().any(|e| matches!(e, Event::Grid { .. })));
}

#[test]
fn bar_positions_are_absolute_slot_indices() {
    let (mut chart, clock) = chart();
    clock.set(0);
    chart.ingest(1);
    chart.draw();
    // One valid bar in a capacity-3 window lives at slot 2, not slot 0.
    assert_eq!(
        chart.render().events,
        vec![Event::Header, Event::Bar { pos: 2, open: 1, close: 1 }, Event::Footer]
    );
}
