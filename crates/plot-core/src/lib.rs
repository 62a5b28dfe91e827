// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the record-to-series pipeline and its stages.

pub mod error;
pub mod record;
pub mod field;
pub mod layout;
pub mod series;
pub mod palette;
pub mod trim;
pub mod extract;
pub mod rolling;
pub mod highlight;
pub mod builder;
pub mod scale;
pub mod axis;
pub mod text;
pub mod pipeline;

pub use error::PlotError;
pub use record::{DataDocument, RawRecord};
pub use field::{ArrayFilter, FieldDescriptor, HighlightSpec, RollingAverage};
pub use layout::LayoutDocument;
pub use series::{RenderedSeries, SeriesStyle, SeriesType, Side};
pub use palette::{Palette, Rgb};
pub use trim::drop_leading_zeros;
pub use extract::extract_array_field;
pub use rolling::{clipped_moving_average, moving_average};
pub use highlight::split_highlight;
pub use builder::build_series;
pub use scale::{apply_log_scale, signed_log, LogTicks};
pub use axis::{Figure, ScaleKind};
pub use text::format_hover;
pub use pipeline::{plot_data, PlotOptions, PlotPipeline};
