// File: crates/plot-core/tests/rolling.rs
// Purpose: Validate trailing moving average and its clipped variant.

use plot_core::{clipped_moving_average, moving_average};

fn some(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn constant_sequence_stays_constant() {
    let out = moving_average(&some(&[4.0; 12]), 7);
    assert_eq!(out.len(), 12);
    assert!(out.iter().all(|v| *v == Some(4.0)));
}

#[test]
fn window_shrinks_at_start() {
    let out = moving_average(&some(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
    assert_eq!(out, vec![Some(1.0), Some(1.5), Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn nulls_are_skipped_inside_window() {
    let values = vec![Some(2.0), None, Some(4.0), None, None, None];
    let out = moving_average(&values, 2);
    assert_eq!(out, vec![Some(2.0), Some(2.0), Some(4.0), Some(4.0), None, None]);
}

#[test]
fn zero_window_is_identity() {
    let values = some(&[3.0, 9.0, 1.0]);
    assert_eq!(moving_average(&values, 0), values);
}

#[test]
fn clipped_blanks_prefix_and_keeps_length() {
    let values = some(&[10.0; 10]);
    let out = clipped_moving_average(&values, 7, 2);
    assert_eq!(out.len(), 10);
    assert!(out[..5].iter().all(Option::is_none));
    assert!(out[5..].iter().all(|v| *v == Some(10.0)));
}

#[test]
fn clipped_longer_than_input_is_all_null() {
    let out = clipped_moving_average(&some(&[1.0, 2.0]), 7, 0);
    assert_eq!(out, vec![None, None]);
}
