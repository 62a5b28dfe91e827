// File: crates/plot-core/tests/pipeline.rs
// Purpose: End-to-end pipeline scenarios over descriptors and raw records.

use plot_core::series::{LineStroke, Marker, OverlayAxis, SeriesStyle};
use plot_core::{
    plot_data, DataDocument, FieldDescriptor, HighlightSpec, Palette, PlotError, PlotOptions, PlotPipeline,
    RawRecord, RollingAverage, SeriesType, Side,
};
use serde_json::json;

fn daily(values: &[f64]) -> Vec<RawRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut r = RawRecord::new();
            r.insert("date".into(), json!(format!("2021-01-{:02}", i + 1)));
            r.insert("cases".into(), json!(v));
            r
        })
        .collect()
}

fn fields(text: &str) -> Vec<FieldDescriptor> {
    serde_json::from_str(text).expect("fields parse")
}

#[test]
fn single_bar_series() {
    let data = DataDocument::from_json(
        r#"{ "data": [ { "date": "2021-01-01", "cases": 0 }, { "date": "2021-01-02", "cases": 5 } ] }"#,
    )
    .expect("data parse");
    let out = plot_data(&fields(r#"[{ "value": "cases", "label": "Cases", "type": "bar" }]"#), &data.data)
        .expect("pipeline");

    assert_eq!(out.len(), 1);
    let s = &out[0];
    assert_eq!(s.name, "Cases");
    assert_eq!(s.x, vec![Some("2021-01-01".to_string()), Some("2021-01-02".to_string())]);
    assert_eq!(s.y, vec![Some(0.0), Some(5.0)]);
    assert_eq!(s.series_type, SeriesType::Bar);
    assert_eq!(s.style, SeriesStyle::Marker { marker: Marker { color: "#5694CA".into() } });
    assert!(s.overlay.is_none());
}

#[test]
fn label_defaults_to_value_key() {
    let out = plot_data(&[FieldDescriptor::new("cases")], &daily(&[1.0, 2.0])).expect("pipeline");
    assert_eq!(out[0].name, "cases");
}

#[test]
fn rolling_average_true_over_constant_data() {
    let out = plot_data(
        &fields(r#"[{ "value": "cases", "rollingAverage": true }]"#),
        &daily(&[10.0; 10]),
    )
    .expect("pipeline");
    assert_eq!(out[0].y, vec![Some(10.0); 10]);
}

#[test]
fn rolling_average_object_clips_prefix() {
    let out = plot_data(
        &fields(r#"[{ "value": "cases", "rollingAverage": { "window": 3, "clipEnd": 1 } }]"#),
        &daily(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    )
    .expect("pipeline");
    assert_eq!(out[0].y, vec![None, None, None, None, Some(4.0), Some(5.0)]);
    assert_eq!(out[0].x.len(), 6);
}

#[test]
fn line_styling_and_fill_variants() {
    let parsed = fields(
        r#"[
            { "value": "cases", "type": "line" },
            { "value": "cases", "type": "line", "solidFill": true, "colour": 3 },
            { "value": "cases", "type": "line", "fill": false }
        ]"#,
    );
    let out = plot_data(&parsed, &daily(&[1.0, 2.0])).expect("pipeline");

    assert_eq!(
        out[0].style,
        SeriesStyle::Line {
            mode: "lines",
            fill: Some("tozeroy"),
            fillcolor: Some("rgba(86,148,202,0.1)".into()),
            line: LineStroke { width: 3, color: "#5694CA".into() },
        }
    );
    assert_eq!(
        out[1].style,
        SeriesStyle::Line {
            mode: "lines",
            fill: Some("tozeroy"),
            fillcolor: Some("rgba(0,48,120,1)".into()),
            line: LineStroke { width: 3, color: "#003078".into() },
        }
    );
    match &out[2].style {
        SeriesStyle::Line { fill, fillcolor, line, .. } => {
            assert!(fill.is_none() && fillcolor.is_none());
            // position 2 -> third palette entry
            assert_eq!(line.color, "#DEEAF4");
        }
        other => panic!("expected line style, got {other:?}"),
    }
}

#[test]
fn overlay_is_passed_through() {
    let out = plot_data(
        &fields(r#"[{ "value": "cases", "overlaying": "y", "side": "right" }]"#),
        &daily(&[1.0]),
    )
    .expect("pipeline");
    assert_eq!(
        out[0].overlay,
        Some(OverlayAxis { yaxis: "y2", overlaying: "y".into(), side: Some(Side::Right) })
    );
}

#[test]
fn highlight_is_emitted_before_main_series() {
    let field = FieldDescriptor::new("cases")
        .with_label("Cases")
        .with_highlight(HighlightSpec { from: -2, to: 0, colour: None, label: Some("Recent".into()) });
    let other = FieldDescriptor::new("cases").with_label("Other");
    let out = plot_data(&[field, other], &daily(&[1.0, 2.0, 3.0, 4.0, 5.0])).expect("pipeline");

    let names: Vec<_> = out.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Recent", "Cases", "Other"]);
    assert_eq!(out[0].y, vec![Some(5.0), Some(4.0)]);
    assert_eq!(out[1].y, vec![Some(1.0), Some(2.0), Some(3.0)]);
    assert_eq!(out[2].y.len(), 5);
}

#[test]
fn trailing_zeros_trimmed_per_field() {
    let mut data = daily(&[3.0, 4.0, 0.0, 0.0]);
    data[3].insert("deaths".into(), json!(1));
    data[2].insert("deaths".into(), json!(0));
    let out = plot_data(&[FieldDescriptor::new("cases"), FieldDescriptor::new("deaths")], &data).expect("pipeline");
    assert_eq!(out[0].y, vec![Some(3.0), Some(4.0)]);
    assert_eq!(out[1].y, vec![None, None, Some(0.0), Some(1.0)]);
}

#[test]
fn array_fields_are_extracted_before_trimming() {
    let data: Vec<RawRecord> = serde_json::from_value(json!([
        { "date": "2021-01-01", "ages": [{ "age": "60+", "rate": 1.0 }] },
        { "date": "2021-01-02", "ages": [] },
        { "date": "2021-01-03", "ages": [{ "age": "60+", "rate": 2.5 }, { "age": "0_59", "rate": 9.0 }] },
        { "date": "2021-01-04", "ages": [{ "age": "0_59", "rate": 3.0 }] }
    ]))
    .expect("records");
    let parsed = fields(
        r#"[{ "value": "ages", "isArray": true, "metric": "rate",
              "filters": { "parameter": "age", "value": "60+" } }]"#,
    );
    let out = plot_data(&parsed, &data).expect("pipeline");
    // last extracted value is null (no match) and counts as zero
    assert_eq!(out[0].x, vec![Some("2021-01-01".to_string()), Some("2021-01-03".to_string())]);
    assert_eq!(out[0].y, vec![Some(1.0), Some(2.5)]);
}

#[test]
fn custom_x_key_and_missing_x() {
    let data: Vec<RawRecord> = serde_json::from_value(json!([
        { "week": 1, "cases": 2 },
        { "cases": 3 }
    ]))
    .expect("records");
    let pipeline = PlotPipeline::new(PlotOptions { x_key: "week".into(), ..PlotOptions::default() });
    let out = pipeline.run(&[FieldDescriptor::new("cases")], &data).expect("pipeline");
    assert_eq!(out[0].x, vec![Some("1".to_string()), None]);
}

#[test]
fn empty_inputs_yield_empty_outputs() {
    assert!(plot_data(&[], &daily(&[1.0, 2.0])).expect("pipeline").is_empty());
    let out = plot_data(&[FieldDescriptor::new("cases")], &[]).expect("pipeline");
    assert_eq!(out.len(), 1);
    assert!(out[0].is_empty());
}

#[test]
fn palette_overflow_is_an_error() {
    let err = plot_data(&[FieldDescriptor::new("cases").with_colour(12)], &daily(&[1.0, 2.0]))
        .expect_err("index 12 is past the palette");
    assert!(matches!(err, PlotError::PaletteIndex { index: 12, len: 12, .. }));

    let small = PlotPipeline::new(PlotOptions { palette: Palette::scale(), ..PlotOptions::default() });
    let many: Vec<_> = (0..8).map(|_| FieldDescriptor::new("cases")).collect();
    assert!(small.run(&many, &daily(&[1.0, 2.0])).is_err());
}

#[test]
fn records_are_not_mutated() {
    let data = daily(&[1.0, 2.0, 3.0, 0.0]);
    let before = data.clone();
    let field = FieldDescriptor::new("cases")
        .with_rolling_average(RollingAverage::On)
        .with_highlight(HighlightSpec { from: -1, to: 0, ..HighlightSpec::default() });
    let _ = plot_data(&[field], &data).expect("pipeline");
    assert_eq!(data, before);
}
