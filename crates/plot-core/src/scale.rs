// File: crates/plot-core/src/scale.rs
// Summary: Signed-logarithm value transform and matching tick ladder for
// log-like axes over mixed-sign data.

use serde::Serialize;

use crate::series::{HoverTemplate, RenderedSeries};

/// Human-meaningful tick values offered between the observed extremes.
pub const TICK_LADDER: [f64; 10] = [
    -1000.0, -10.0, 0.0, 10.0, 100.0, 1000.0, 10_000.0, 100_000.0, 1_000_000.0, 10_000_000.0,
];

/// Hover template shown for log-scaled traces (reads the untransformed `text`).
pub const LOG_HOVER_TEMPLATE: &str = "%{text:.1f}";

/// `sign(v) * ln(|v|)`, with `0 -> 0`. Odd-symmetric for every non-zero `v`.
#[inline]
pub fn signed_log(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v.signum() * v.abs().ln() }
}

/// Tick positions (transformed) and labels (original values), index-aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LogTicks {
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<f64>,
}

impl LogTicks {
    /// `[min, ladder values strictly inside (min, max), max]`.
    pub fn between(min: f64, max: f64) -> Self {
        let mut ticktext = Vec::with_capacity(TICK_LADDER.len() + 2);
        ticktext.push(min);
        ticktext.extend(TICK_LADDER.iter().copied().filter(|&t| t > min && t < max));
        ticktext.push(max);
        let tickvals = ticktext.iter().map(|&v| signed_log(v)).collect();
        Self { tickvals, ticktext }
    }

    pub fn is_empty(&self) -> bool { self.ticktext.is_empty() }
}

/// Smallest and largest non-null y across the whole family.
pub fn observed_range(series: &[RenderedSeries]) -> Option<(f64, f64)> {
    series.iter().flat_map(|s| s.values()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogScaled {
    pub series: Vec<RenderedSeries>,
    pub ticks: LogTicks,
}

/// Transform every y through [`signed_log`], keep the originals in `text`
/// for hover, and derive the tick ladder from the family's observed range.
/// Inputs are left untouched; an all-null family gets no ticks.
pub fn apply_log_scale(series: &[RenderedSeries]) -> LogScaled {
    let ticks = observed_range(series)
        .map(|(lo, hi)| LogTicks::between(lo, hi))
        .unwrap_or_default();

    let series = series
        .iter()
        .map(|s| {
            let mut scaled = s.clone();
            scaled.text = Some(s.y.clone());
            scaled.y = s.y.iter().map(|v| v.map(signed_log)).collect();
            scaled.hovertemplate = Some(HoverTemplate::Format(LOG_HOVER_TEMPLATE.to_string()));
            scaled
        })
        .collect();

    LogScaled { series, ticks }
}
