// File: crates/plot-core/src/rolling.rs
// Summary: Trailing simple moving average over nullable values.

/// Window used when a rolling average is requested without a size.
pub const DEFAULT_WINDOW: usize = 7;

/// Leading outputs always blanked by a clipped average, on top of `clip_end`.
pub const CLIP_PADDING: usize = 3;

/// Trailing mean of up to `window` values ending at each position.
///
/// The window shrinks at the start of the sequence (position `i < window`
/// averages the `i + 1` values available). Nulls inside a window are skipped;
/// a window holding no values yields `None`. A zero window is treated as one.
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let w = window.max(1);
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(w);
        let (sum, count) = values[start..=i]
            .iter()
            .flatten()
            .fold((0.0f64, 0usize), |(s, c), v| (s + v, c + 1));
        out.push(if count > 0 { Some(sum / count as f64) } else { None });
    }
    out
}

/// Moving average with the first `clip_end + CLIP_PADDING` outputs replaced
/// by `None`. Output length always equals input length.
pub fn clipped_moving_average(values: &[Option<f64>], window: usize, clip_end: usize) -> Vec<Option<f64>> {
    let trim = (clip_end + CLIP_PADDING).min(values.len());
    let mut out = moving_average(values, window);
    out[..trim].iter_mut().for_each(|v| *v = None);
    out
}
