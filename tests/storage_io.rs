use dvg::export::ExportMessage;
use dvg::layout::layout_arcs;
use dvg::pipeline::{ChartConfig, render, sample_records};
use dvg::render::bar::bar_layout;
use dvg::storage::{self, arc_rows, bar_rows};
use dvg::svg::to_svg_string;
use dvg::Dimensions;
use std::fs;
use tempfile::tempdir;

#[test]
fn saves_svg_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    let svg = to_svg_string(&render(&ChartConfig::default())).unwrap();
    storage::save_svg(&svg, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), svg);
}

#[test]
fn bar_geometry_csv_has_one_row_per_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bars.csv");
    let recs = sample_records();
    let layout = bar_layout(&recs, &Dimensions::default());
    storage::save_geometry_csv(&bar_rows(&recs, &layout.bars), &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["label", "value", "x", "y", "width", "height"]);
    let rows: Vec<_> = rdr.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), recs.len());
    assert_eq!(&rows[0][0], "0");
    assert_eq!(rows[0][1].parse::<f64>().unwrap(), 120.0);
}

#[test]
fn arc_geometry_json_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arcs.json");
    let recs = sample_records();
    let arcs = layout_arcs(&recs);
    storage::save_geometry_json(&arc_rows(&recs, &arcs), &path).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["label"], "0");
    assert_eq!(items[0]["start_angle"], 0.0);
}

#[test]
fn saves_host_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.json");
    storage::save_message_json(&ExportMessage::create_chart("<svg/>".into()), &path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["type"], "create-chart");
}
