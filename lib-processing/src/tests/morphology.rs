use crate::*;
use super::{mask, masks};

#[test]
fn test_zero_width_is_identity() {
    for m in masks() {
        assert_eq!(dilate(&m, 0), m);
        assert_eq!(erode(&m, 0), m);
        assert_eq!(open(&m, 0), m);
        assert_eq!(close(&m, 0), m);
    }
}

#[test]
fn test_dilate_merges_overlapping_extensions() {
    assert_eq!(dilate(&mask("0100010"), 2), mask("1111111"));
    assert_eq!(dilate(&mask("000100000"), 1), mask("001110000"));
}

#[test]
fn test_dilate_saturates() {
    for m in masks() {
        let expected = vec![m.iter().any(|&v| v); m.len()];
        assert_eq!(dilate(&m, m.len()), expected);
    }
}

#[test]
fn test_erode_eliminates_short_runs() {
    let m = mask("111011111");
    let eroded = erode(&m, 2);
    assert_eq!(eroded, mask("000000100"));
    assert!(true_intervals(&eroded).len() < true_intervals(&m).len());
}

#[test]
fn test_erode_saturates() {
    for m in masks() {
        assert_eq!(erode(&m, m.len()), vec![false; m.len()]);
    }
}

#[test]
fn test_open_drops_short_runs_only() {
    let m = mask("0110011111100");
    assert_eq!(open(&m, 1), mask("0000011111100"));
}

#[test]
fn test_open_is_idempotent() {
    for m in masks() {
        for width in 1..5 {
            let once = open(&m, width);
            assert_eq!(open(&once, width), once, "mask {:?}, width {}", m, width);
        }
    }
}

#[test]
fn test_open_never_enlarges() {
    for m in masks() {
        let opened = open(&m, 2);
        assert!(opened.iter().zip(&m).all(|(&o, &v)| !o || v));
    }
}

#[test]
fn test_close_fills_gaps() {
    assert_eq!(close(&mask("0111001110"), 1), mask("0111111110"));
    // Gap wider than 2 * width stays open.
    assert_eq!(close(&mask("0110001100"), 1), mask("0110001100"));
}

#[test]
fn test_close_retracts_runs_at_the_edges() {
    assert_eq!(close(&mask("1111100000"), 2), mask("0011100000"));
    assert_eq!(close(&mask("0000011111"), 2), mask("0000011100"));
    // Interior runs keep their extent.
    assert_eq!(close(&mask("0001110000"), 2), mask("0001110000"));
}

#[test]
fn test_seconds_to_width() {
    assert_eq!(seconds_to_width(0.1 / 2.0, 300.0), 15);
    assert_eq!(seconds_to_width(0.5 / 2.0, 300.0), 75);
    assert_eq!(seconds_to_width(0.019, 100.0), 1);
    assert_eq!(seconds_to_width(-1.0, 300.0), 0);
    assert_eq!(seconds_to_width(f64::NAN, 300.0), 0);
}
