// File: crates/ohlc-core/tests/gridlines.rs
// Purpose: Pin gridline anchoring, including truncation toward zero for
// negative minima and the disabled non-positive step.

use ohlc_core::gridlines;

#[test]
fn integer_anchor_sits_at_step_multiple_below_minimum() {
    // anchor = trunc(3 / 5) * 5 = 0; bound = 17 + 5 = 22
    assert_eq!(gridlines(3, 17, 5), vec![0, 5, 10, 15, 20]);
}

#[test]
fn negative_minimum_truncates_toward_zero_not_floor() {
    // trunc(-7 / 5) = -1, so the anchor is -5 (above the minimum);
    // a floor rule would have started at -10.
    assert_eq!(gridlines(-7, 3, 5), vec![-5, 0, 5]);
}

#[test]
fn float_anchor_matches_integer_semantics() {
    assert_eq!(gridlines(3.0f64, 17.0, 5.0), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(gridlines(-7.0f64, 3.0, 5.0), vec![-5.0, 0.0, 5.0]);
}

#[test]
fn non_positive_step_yields_no_lines() {
    assert!(gridlines(3, 17, 0).is_empty());
    assert!(gridlines(3, 17, -5).is_empty());
    assert!(gridlines(3.0f32, 17.0, 0.0).is_empty());
}

#[test]
fn exact_multiple_minimum_anchors_on_itself() {
    assert_eq!(gridlines(10, 25, 5), vec![10, 15, 20, 25]);
}
