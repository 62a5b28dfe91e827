// File: crates/plot-core/src/field.rs
// Summary: Field descriptor: declarative per-series configuration.
// Notes:
// - Every optional property receives its concrete default during
//   deserialisation; downstream code never re-derives defaults.
// - `colour` and `label` fall back to values only known with context (field
//   position, value key) and are exposed through accessors.

use serde::Deserialize;
use serde_json::Value;

use crate::rolling::DEFAULT_WINDOW;
use crate::series::{SeriesType, Side};

/// Nested-list filter for array fields: keep entries whose `parameter`
/// equals `value`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArrayFilter {
    pub parameter: String,
    pub value: Value,
}

/// Rolling-average setting. Accepts `true`, `false`, or `{ window, clipEnd }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RollingAverageRepr")]
pub enum RollingAverage {
    #[default]
    Off,
    /// Default window, no clipping.
    On,
    /// Custom window; the first `clip_end + 3` outputs are blanked.
    Clipped { window: usize, clip_end: usize },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RollingAverageRepr {
    Flag(bool),
    Config {
        #[serde(default = "default_window")]
        window: usize,
        #[serde(default, rename = "clipEnd")]
        clip_end: usize,
    },
}

fn default_window() -> usize { DEFAULT_WINDOW }

impl From<RollingAverageRepr> for RollingAverage {
    fn from(repr: RollingAverageRepr) -> Self {
        match repr {
            RollingAverageRepr::Flag(true) => RollingAverage::On,
            RollingAverageRepr::Flag(false) => RollingAverage::Off,
            RollingAverageRepr::Config { window, clip_end } => RollingAverage::Clipped { window, clip_end },
        }
    }
}

/// Sub-range of a series to draw as a separate highlighted trace.
/// `from`/`to` use the sentinel rules in [`crate::highlight::resolve_range`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HighlightSpec {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
    #[serde(default)]
    pub colour: Option<usize>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Metric key read from each record.
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub series_type: SeriesType,
    /// Palette index; defaults to the field's position.
    #[serde(default)]
    pub colour: Option<usize>,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub filters: Option<ArrayFilter>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default = "default_fill")]
    pub fill: bool,
    #[serde(default)]
    pub solid_fill: bool,
    #[serde(default)]
    pub overlaying: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default)]
    pub rolling_average: RollingAverage,
    #[serde(default)]
    pub highlight: Option<HighlightSpec>,
}

fn default_fill() -> bool { true }

impl FieldDescriptor {
    /// Descriptor for `value` with every property at its default.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            series_type: SeriesType::default(),
            colour: None,
            is_array: false,
            filters: None,
            metric: None,
            fill: default_fill(),
            solid_fill: false,
            overlaying: None,
            side: None,
            rolling_average: RollingAverage::Off,
            highlight: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = series_type;
        self
    }

    pub fn with_colour(mut self, colour: usize) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_rolling_average(mut self, rolling: RollingAverage) -> Self {
        self.rolling_average = rolling;
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightSpec) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Nested-array extraction: filter entries by `filter`, project `metric`.
    pub fn with_array(mut self, filter: Option<ArrayFilter>, metric: impl Into<String>) -> Self {
        self.is_array = true;
        self.filters = filter;
        self.metric = Some(metric.into());
        self
    }

    pub fn with_overlay(mut self, overlaying: impl Into<String>, side: Option<Side>) -> Self {
        self.overlaying = Some(overlaying.into());
        self.side = side;
        self
    }

    /// Series name: the declared label, else the value key.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    /// Palette index: the declared colour, else the field's position.
    pub fn colour_index(&self, position: usize) -> usize {
        self.colour.unwrap_or(position)
    }
}
