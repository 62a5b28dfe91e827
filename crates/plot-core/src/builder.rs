// File: crates/plot-core/src/builder.rs
// Summary: Build one styled series from a field descriptor and its x/y arrays.

use crate::error::Result;
use crate::field::{FieldDescriptor, RollingAverage};
use crate::palette::Palette;
use crate::rolling::{clipped_moving_average, moving_average, DEFAULT_WINDOW};
use crate::series::{LineStroke, Marker, OverlayAxis, RenderedSeries, SeriesStyle, SeriesType};

/// Stroke width of line traces, in pixels.
pub const LINE_WIDTH: u32 = 3;
/// Area-fill opacity of line traces unless `solidFill` is set.
pub const FILL_ALPHA: f64 = 0.1;

pub fn build_series(
    field: &FieldDescriptor,
    position: usize,
    x: Vec<Option<String>>,
    y: Vec<Option<f64>>,
    palette: &Palette,
) -> Result<RenderedSeries> {
    let colour = palette.get(field.colour_index(position))?;

    let style = match field.series_type {
        SeriesType::Line => {
            let (fill, fillcolor) = if field.fill {
                let alpha = if field.solid_fill { 1.0 } else { FILL_ALPHA };
                (Some("tozeroy"), Some(colour.rgb.rgba(alpha)))
            } else {
                (None, None)
            };
            SeriesStyle::Line {
                mode: "lines",
                fill,
                fillcolor,
                line: LineStroke { width: LINE_WIDTH, color: colour.hex.clone() },
            }
        }
        SeriesType::Bar => SeriesStyle::Marker { marker: Marker { color: colour.hex.clone() } },
    };

    let y = match field.rolling_average {
        RollingAverage::Off => y,
        RollingAverage::On => moving_average(&y, DEFAULT_WINDOW),
        RollingAverage::Clipped { window, clip_end } => clipped_moving_average(&y, window, clip_end),
    };

    let series = RenderedSeries::new(field.label(), field.series_type, style, x, y);
    Ok(match &field.overlaying {
        Some(overlaying) => series.with_overlay(OverlayAxis {
            yaxis: "y2",
            overlaying: overlaying.clone(),
            side: field.side,
        }),
        None => series,
    })
}
