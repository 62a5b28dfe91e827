// File: crates/plot-core/src/pipeline.rs
// Summary: Records + field descriptors -> ordered list of rendered series.

use crate::axis::{Figure, ScaleKind};
use crate::builder::build_series;
use crate::error::Result;
use crate::extract::extract_array_field;
use crate::field::FieldDescriptor;
use crate::highlight::split_highlight;
use crate::palette::Palette;
use crate::record::{numeric, x_label, RawRecord};
use crate::series::RenderedSeries;
use crate::trim::drop_leading_zeros;

/// Key used for the x axis when none is given.
pub const DEFAULT_X_KEY: &str = "date";

#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub x_key: String,
    pub palette: Palette,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { x_key: DEFAULT_X_KEY.to_string(), palette: Palette::standard() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PlotPipeline {
    pub options: PlotOptions,
}

impl PlotPipeline {
    pub fn new(options: PlotOptions) -> Self {
        Self { options }
    }

    /// Build every series for `fields`, in order. A highlighted field emits
    /// its highlight trace immediately before its main trace.
    ///
    /// `records` is read-only and must already be sorted by the x key.
    pub fn run(&self, fields: &[FieldDescriptor], records: &[RawRecord]) -> Result<Vec<RenderedSeries>> {
        let mut out = Vec::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            self.push_field(&mut out, position, field, records)?;
        }
        Ok(out)
    }

    /// [`run`](Self::run), then compose axes for the requested scale.
    pub fn figure(&self, fields: &[FieldDescriptor], records: &[RawRecord], kind: ScaleKind) -> Result<Figure> {
        Ok(Figure::compose(self.run(fields, records)?, kind))
    }

    fn push_field(
        &self,
        out: &mut Vec<RenderedSeries>,
        position: usize,
        field: &FieldDescriptor,
        records: &[RawRecord],
    ) -> Result<()> {
        let x_key = self.options.x_key.as_str();

        let extracted;
        let source: &[RawRecord] = if field.is_array {
            extracted = extract_array_field(records, field, x_key);
            &extracted
        } else {
            records
        };

        let trimmed = drop_leading_zeros(source, &[field.value.as_str()]);
        log::debug!(
            "field #{position} '{}': {} records, {} after trimming trailing zeros",
            field.value,
            source.len(),
            trimmed.len()
        );

        let mut x: Vec<Option<String>> = trimmed.iter().map(|r| x_label(r, x_key)).collect();
        let mut y: Vec<Option<f64>> = trimmed.iter().map(|r| numeric(r, &field.value)).collect();

        if let Some(spec) = &field.highlight {
            let segmented = split_highlight(field, spec, position, &x, &y, &self.options.palette)?;
            out.push(segmented.highlighted);
            x = segmented.x;
            y = segmented.y;
        }

        out.push(build_series(field, position, x, y, &self.options.palette)?);
        Ok(())
    }
}

/// Run the pipeline with default options (`x_key = "date"`, standard palette).
pub fn plot_data(fields: &[FieldDescriptor], records: &[RawRecord]) -> Result<Vec<RenderedSeries>> {
    PlotPipeline::default().run(fields, records)
}
