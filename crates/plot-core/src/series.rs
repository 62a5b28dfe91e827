// File: crates/plot-core/src/series.rs
// Summary: Rendered series model for line and bar traces, serialised in the
// shape a charting surface consumes (`{ name, x, y, type, ...style }`).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    #[default]
    Bar,
}

/// Which side of the plot a secondary axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineStroke {
    pub width: u32,
    pub color: String,
}

/// Visual attributes of a trace. Flattened into the series object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesStyle {
    Line {
        mode: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fillcolor: Option<String>,
        line: LineStroke,
    },
    Marker {
        marker: Marker,
    },
}

impl SeriesStyle {
    /// Colour the trace is drawn with.
    pub fn colour(&self) -> &str {
        match self {
            SeriesStyle::Line { line, .. } => &line.color,
            SeriesStyle::Marker { marker } => &marker.color,
        }
    }
}

/// Secondary y-axis placement, passed through from the field descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlayAxis {
    pub yaxis: &'static str,
    pub overlaying: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HoverTemplate {
    /// One template applied to every point.
    Format(String),
    /// Pre-rendered label per point.
    PerPoint(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedSeries {
    pub name: String,
    pub x: Vec<Option<String>>,
    pub y: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    #[serde(flatten)]
    pub style: SeriesStyle,
    #[serde(flatten)]
    pub overlay: Option<OverlayAxis>,
    /// Untransformed values when `y` holds scaled ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<HoverTemplate>,
}

impl RenderedSeries {
    pub fn new(
        name: impl Into<String>,
        series_type: SeriesType,
        style: SeriesStyle,
        x: Vec<Option<String>>,
        y: Vec<Option<f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            series_type,
            style,
            overlay: None,
            text: None,
            hovertemplate: None,
        }
    }

    pub fn with_overlay(mut self, overlay: OverlayAxis) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn len(&self) -> usize { self.y.len() }

    pub fn is_empty(&self) -> bool { self.y.is_empty() }

    /// Non-null y values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.y.iter().flatten().copied()
    }
}
