// File: crates/plot-core/src/axis.rs
// Summary: Y-axis layout derived from a finished series family: tick arrays
// for signed-log scales and the secondary axis for overlaid traces.

use serde::Serialize;

use crate::scale::{apply_log_scale, LogTicks};
use crate::series::{HoverTemplate, RenderedSeries, Side};
use crate::text::format_hover;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    SignedLog,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct YAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangemode: Option<&'static str>,
}

impl YAxis {
    fn with_ticks(ticks: LogTicks) -> Self {
        Self {
            tickmode: Some("array"),
            tickvals: Some(ticks.tickvals),
            ticktext: Some(ticks.ticktext),
            rangemode: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecondaryAxis {
    pub overlaying: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub rangemode: &'static str,
    pub showgrid: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlotLayout {
    pub yaxis: YAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<SecondaryAxis>,
}

/// Series plus the axis layout they should be drawn against.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<RenderedSeries>,
    pub layout: PlotLayout,
}

impl Figure {
    /// Finalise a series family for display.
    ///
    /// `SignedLog` rescales every trace and fills the tick arrays. Any trace
    /// with an overlay adds a `y2` axis (the last one wins) and pins both
    /// axes to zero. Traces without a hover template get per-point labels.
    pub fn compose(series: Vec<RenderedSeries>, kind: ScaleKind) -> Self {
        let (mut data, mut yaxis) = match kind {
            ScaleKind::Linear => (series, YAxis::default()),
            ScaleKind::SignedLog => {
                let scaled = apply_log_scale(&series);
                (scaled.series, YAxis::with_ticks(scaled.ticks))
            }
        };

        let mut yaxis2 = None;
        for s in &mut data {
            if let Some(overlay) = &s.overlay {
                yaxis.rangemode = Some("tozero");
                yaxis2 = Some(SecondaryAxis {
                    overlaying: overlay.overlaying.clone(),
                    side: overlay.side,
                    rangemode: "tozero",
                    showgrid: false,
                });
            }
            if s.hovertemplate.is_none() {
                let labels = s.y.iter().map(|v| v.map(format_hover).unwrap_or_default()).collect();
                s.hovertemplate = Some(HoverTemplate::PerPoint(labels));
            }
        }

        Self { data, layout: PlotLayout { yaxis, yaxis2 } }
    }
}
