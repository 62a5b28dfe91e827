// File: crates/plot-core/tests/snapshot.rs
// Purpose: Golden snapshot of the serialised figure with bless flow.
// Behavior:
// - Builds a deterministic figure and serialises it to JSON.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the parsed JSON for equality.
// - Else, logs a note and returns (skips) without failing to ease first run.

use plot_core::{DataDocument, LayoutDocument, PlotPipeline, ScaleKind};

const LAYOUT: &str = r#"{ "cards": [ { "tabs": [ { "fields": [
  { "value": "cases", "label": "Cases", "type": "bar", "highlight": { "from": -1, "to": 0, "label": "Latest" } },
  { "value": "deaths", "label": "Deaths", "type": "line", "colour": 10 }
] } ] } ] }"#;

const DATA: &str = r#"{ "data": [
  { "date": "2021-01-01", "cases": 5, "deaths": 1 },
  { "date": "2021-01-02", "cases": 7, "deaths": 0 },
  { "date": "2021-01-03", "cases": 9, "deaths": 2 }
] }"#;

fn render_json() -> String {
    let layout = LayoutDocument::from_json(LAYOUT).expect("layout");
    let data = DataDocument::from_json(DATA).expect("data");
    let figure = PlotPipeline::default()
        .figure(layout.fields(0, 0), &data.data, ScaleKind::Linear)
        .expect("figure");
    serde_json::to_string_pretty(&figure).expect("serialise figure")
}

#[test]
fn golden_basic_figure() {
    let json = render_json();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("figure.json");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &json).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), json.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        // Compare parsed documents to ignore whitespace and key order
        let got: serde_json::Value = serde_json::from_str(&json).expect("parse got");
        let want: serde_json::Value = serde_json::from_str(&want).expect("parse want");
        assert_eq!(got, want, "figure differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
