// File: crates/demo/src/main.rs
// Summary: Demo loads a data document (JSON or CSV) plus a layout, runs the
// plot pipeline for one card/tab, and writes the figure as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{palette, DataDocument, LayoutDocument, PlotOptions, PlotPipeline, RawRecord, ScaleKind};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "plot-demo", about = "Turn records and a field layout into chart series")]
struct Args {
    /// Data file: `{ "data": [..] }` JSON, or CSV with a header row.
    #[arg(long, default_value = "crates/demo/assets/data.json")]
    data: PathBuf,

    /// Layout document holding `cards[].tabs[].fields`.
    #[arg(long, default_value = "crates/demo/assets/layout.json")]
    layout: PathBuf,

    #[arg(long, default_value_t = 0)]
    card: usize,

    #[arg(long, default_value_t = 0)]
    tab: usize,

    /// Record key used for the x axis.
    #[arg(long, default_value = "date")]
    x_key: String,

    /// Palette preset name (`standard` or `scale`).
    #[arg(long, default_value = "standard")]
    palette: String,

    /// Force the signed-log y scale regardless of the tab layout.
    #[arg(long)]
    log_y: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let records = load_records(&args.data)
        .with_context(|| format!("failed to load data '{}'", args.data.display()))?;
    log::info!("Loaded {} records from {}", records.len(), args.data.display());

    let layout_text = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("reading {}", args.layout.display()))?;
    let layout = LayoutDocument::from_json(&layout_text)
        .with_context(|| format!("parsing layout '{}'", args.layout.display()))?;

    let fields = layout.fields(args.card, args.tab);
    let kind = match layout.tab(args.card, args.tab).map(|t| t.scale_kind()) {
        _ if args.log_y => ScaleKind::SignedLog,
        Some(kind) => kind,
        None => ScaleKind::Linear,
    };

    let palette = palette::find(&args.palette)
        .with_context(|| format!("unknown palette '{}'", args.palette))?;
    let pipeline = PlotPipeline::new(PlotOptions { x_key: args.x_key.clone(), palette });

    let figure = pipeline.figure(fields, &records, kind)?;
    log::info!("Built {} series from {} fields ({:?} scale)", figure.data.len(), fields.len(), kind);

    let json = serde_json::to_string_pretty(&figure)?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        return load_csv(path);
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(DataDocument::from_json(&text)?.data)
}

/// Load a CSV with a header row. Numeric cells become numbers, empty cells null.
fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let row = headers
            .iter()
            .zip(rec.iter())
            .map(|(key, cell)| (key.clone(), cell_value(cell)))
            .collect::<RawRecord>();
        out.push(row);
    }
    Ok(out)
}

fn cell_value(cell: &str) -> Value {
    let cell = cell.trim();
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = cell.parse::<i64>() {
        return Value::Number(n.into());
    }
    match cell.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::cell_value;
    use plot_core::record::x_label;
    use plot_core::RawRecord;
    use serde_json::{json, Value};

    #[test]
    fn integer_cells_stay_integers() {
        assert_eq!(cell_value("1"), json!(1));
        assert_eq!(cell_value(" -42 "), json!(-42));

        let mut row = RawRecord::new();
        row.insert("week".into(), cell_value("1"));
        assert_eq!(x_label(&row, "week").as_deref(), Some("1"));
    }

    #[test]
    fn other_cells() {
        assert_eq!(cell_value("2.5"), json!(2.5));
        assert_eq!(cell_value(""), Value::Null);
        assert_eq!(cell_value("2021-01-01"), json!("2021-01-01"));
        assert_eq!(cell_value("NaN"), json!("NaN"));
    }
}
