//! Per-record geometry derived from records and scales.
//!
//! All functions here are pure: output depends only on the arguments and has
//! the same length and order as the input records.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::models::DataRecord;
use crate::scale::{BandScale, LinearScale};

/// Bar rectangle in plot-area coordinates (margin not applied).
///
/// `height` is negative for values below the linear domain's lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Angular span of one slice, radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcGeometry {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One bar per record: `x = band(label)`, `y = linear(value)`,
/// `height = inner_height - linear(value)`.
///
/// Labels missing from the band domain are placed at the start of the band range.
pub fn layout_bars(
    records: &[DataRecord],
    band: &BandScale,
    linear: &LinearScale,
    inner_height: f64,
) -> Vec<BarGeometry> {
    let width = band.bandwidth();
    let fallback_x = band.range().0.min(band.range().1);
    records
        .iter()
        .map(|r| {
            let y = linear.map(r.value);
            BarGeometry {
                x: band.map(r.display_label()).unwrap_or(fallback_x),
                y,
                width,
                height: inner_height - y,
            }
        })
        .collect()
}

/// Partition the full circle in record order, proportionally to each value.
///
/// Negative values get an empty span; if nothing is positive every span is empty.
pub fn layout_arcs(records: &[DataRecord]) -> Vec<ArcGeometry> {
    let total: f64 = records.iter().map(|r| r.value.max(0.0)).sum();
    let mut angle = 0.0;
    records
        .iter()
        .map(|r| {
            let span = if total > 0.0 {
                r.value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let arc = ArcGeometry {
                start_angle: angle,
                end_angle: angle + span,
            };
            angle += span;
            arc
        })
        .collect()
}
