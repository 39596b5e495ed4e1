use crate::error::Result;
use crate::export::ExportMessage;
use crate::layout::{ArcGeometry, BarGeometry};
use crate::models::DataRecord;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// One bar with the record it was laid out for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRow<'a> {
    pub label: &'a str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One slice with the record it was laid out for. Angles in radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcRow<'a> {
    pub label: &'a str,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

pub fn bar_rows<'a>(records: &'a [DataRecord], bars: &[BarGeometry]) -> Vec<BarRow<'a>> {
    records
        .iter()
        .zip(bars)
        .map(|(r, b)| BarRow {
            label: r.display_label(),
            value: r.value,
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
        })
        .collect()
}

pub fn arc_rows<'a>(records: &'a [DataRecord], arcs: &[ArcGeometry]) -> Vec<ArcRow<'a>> {
    records
        .iter()
        .zip(arcs)
        .map(|(r, a)| ArcRow {
            label: r.display_label(),
            value: r.value,
            start_angle: a.start_angle,
            end_angle: a.end_angle,
        })
        .collect()
}

/// Write an SVG document as-is.
pub fn save_svg<P: AsRef<Path>>(svg: &str, path: P) -> Result<()> {
    fs::write(path, svg)?;
    Ok(())
}

/// Save geometry rows as CSV with header.
pub fn save_geometry_csv<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save geometry rows as pretty JSON array.
pub fn save_geometry_json<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save the host message that an export would post.
pub fn save_message_json<P: AsRef<Path>>(message: &ExportMessage, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string(message)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("bars.csv");
        let jsonp = dir.path().join("bars.json");
        let recs = vec![DataRecord::new("a", 2.0)];
        let bars = vec![BarGeometry {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        }];
        let rows = bar_rows(&recs, &bars);
        save_geometry_csv(&rows, &csvp).unwrap();
        save_geometry_json(&rows, &jsonp).unwrap();
        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("label,value,x,y,width,height"));
        assert!(jsonp.exists());
    }
}
