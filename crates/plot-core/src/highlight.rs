// File: crates/plot-core/src/highlight.rs
// Summary: Split a built series into a highlighted sub-range and the remaining points.

use crate::error::Result;
use crate::field::{FieldDescriptor, HighlightSpec};
use crate::palette::Palette;
use crate::series::{Marker, RenderedSeries, SeriesStyle};

/// Outcome of [`split_highlight`]: remainder arrays in ascending order plus
/// the highlighted trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Segmented {
    pub x: Vec<Option<String>>,
    pub y: Vec<Option<f64>>,
    pub highlighted: RenderedSeries,
}

/// Resolve `from`/`to` against a series of `len` points into a half-open
/// range of chronological positions.
///
/// Non-negative bounds count from the oldest point: `from = 0, to = 3`
/// selects the three earliest points, not the three most recent.
///
/// - `from < 0` counts back from the end: `len + from`.
/// - `to < 0` resolves to `len - to`; `to == 0` means "through the end".
///
/// Both bounds are clamped to `[0, len]`. `start >= end` is an empty range.
pub fn resolve_range(spec: &HighlightSpec, len: usize) -> (usize, usize) {
    let n = len as i64;
    let from = if spec.from < 0 { n + spec.from } else { spec.from };
    let to = match spec.to {
        t if t < 0 => n - t,
        0 => n,
        t => t,
    };
    (from.clamp(0, n) as usize, to.clamp(0, n) as usize)
}

/// Cut the resolved range out of `x`/`y`.
///
/// The highlighted trace lists its points most-recent-first; the remainder
/// keeps ascending order. Neither input slice is modified. The trace takes
/// the field's type, `highlight.label` (default: field label) and
/// `highlight.colour` (default: field position, not the field's colour).
pub fn split_highlight(
    field: &FieldDescriptor,
    spec: &HighlightSpec,
    position: usize,
    x: &[Option<String>],
    y: &[Option<f64>],
    palette: &Palette,
) -> Result<Segmented> {
    let (start, end) = resolve_range(spec, y.len());
    let colour = palette.get(spec.colour.unwrap_or(position))?;
    log::debug!("field '{}': highlight positions {start}..{end} of {}", field.value, y.len());

    let picked = |i: usize| i >= start && i < end;
    let hx = (0..x.len()).rev().filter(|&i| picked(i)).map(|i| x[i].clone()).collect();
    let hy = (0..y.len()).rev().filter(|&i| picked(i)).map(|i| y[i]).collect();
    let rx = (0..x.len()).filter(|&i| !picked(i)).map(|i| x[i].clone()).collect();
    let ry = (0..y.len()).filter(|&i| !picked(i)).map(|i| y[i]).collect();

    let highlighted = RenderedSeries::new(
        spec.label.as_deref().unwrap_or_else(|| field.label()),
        field.series_type,
        SeriesStyle::Marker { marker: Marker { color: colour.hex.clone() } },
        hx,
        hy,
    );

    Ok(Segmented { x: rx, y: ry, highlighted })
}
