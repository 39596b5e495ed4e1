use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dvg"));
}

#[test]
fn kinds_lists_every_chart_kind() {
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.arg("kinds");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wordcloud").and(predicate::str::contains("Donut")));
}

#[test]
fn renders_sample_to_svg_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chart.svg");
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.args(["render", "--out"]).arg(&out);
    cmd.assert().success();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn emits_host_message_for_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, r#"{"type": "pie", "data": [3, 1, 2]}"#).unwrap();
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.arg("render").arg(&input).args(["--width", "400", "--emit-message"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(output).unwrap();
    let v: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(v["type"], "create-chart");
    assert!(v["svg"].as_str().unwrap().contains("width=\"400\""));
}

#[test]
fn writes_bar_geometry_csv() {
    let dir = tempdir().unwrap();
    let geom = dir.path().join("bars.csv");
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.args(["render", "--kind", "bar", "--geometry"]).arg(&geom);
    cmd.assert().success();
    let text = fs::read_to_string(&geom).unwrap();
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn rejects_non_json_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    fs::write(&input, r#"{"type": "bar", "data": [1]}"#).unwrap();
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.arg("render").arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please upload a JSON file"));
}

#[test]
fn rejects_unknown_chart_type() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, r#"{"type": "bogus", "data": [1]}"#).unwrap();
    let mut cmd = Command::cargo_bin("dvg").unwrap();
    cmd.arg("render").arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported chart type: bogus"));
}
