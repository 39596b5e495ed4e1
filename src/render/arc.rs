//! Pie and donut charts: angular partition of the records.

use std::f64::consts::TAU;

use crate::layout::{ArcGeometry, layout_arcs};
use crate::models::{DataRecord, Dimensions};
use crate::scene::{Fill, Primitive, Stroke, VectorScene};
use crate::style::{Rgb8, WHITE};

/// Donut hole radius as a fraction of the outer radius.
pub const DONUT_INNER_RATIO: f64 = 0.6;
// Flattening: at most this many radians per polygon segment.
const MAX_SEGMENT_ANGLE: f64 = TAU / 120.0;
const SEPARATOR_WIDTH: f64 = 1.0;

pub fn render_pie(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    render_arcs(records, dims, color, 0.0)
}

pub fn render_donut(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    render_arcs(records, dims, color, DONUT_INNER_RATIO)
}

fn render_arcs(records: &[DataRecord], dims: &Dimensions, color: Rgb8, inner_ratio: f64) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let outer = (inner_w.min(inner_h) / 2.0).max(0.0);
    if outer == 0.0 {
        return scene;
    }
    let inner = outer * inner_ratio;
    let center = (
        dims.margin.left + inner_w / 2.0,
        dims.margin.top + inner_h / 2.0,
    );

    for arc in layout_arcs(records).iter().filter(|a| a.span() > 0.0) {
        let outline = sector_outline(center, inner, outer, arc);
        let mut closed = outline.clone();
        if let Some(first) = outline.first() {
            closed.push(*first);
        }
        scene.push(Primitive::Polygon {
            points: outline,
            fill: Fill::solid(color),
        });
        scene.push(Primitive::Polyline {
            points: closed,
            stroke: Stroke::new(WHITE, SEPARATOR_WIDTH),
        });
    }
    scene
}

/// Point on the circle; angles run clockwise from twelve o'clock.
fn polar(center: (f64, f64), r: f64, angle: f64) -> (f64, f64) {
    (center.0 + r * angle.sin(), center.1 - r * angle.cos())
}

fn arc_points(center: (f64, f64), r: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let segments = ((end - start) / MAX_SEGMENT_ANGLE).ceil().max(1.0) as usize;
    (0..=segments)
        .map(|i| polar(center, r, start + (end - start) * i as f64 / segments as f64))
        .collect()
}

fn sector_outline(center: (f64, f64), inner: f64, outer: f64, arc: &ArcGeometry) -> Vec<(f64, f64)> {
    let mut points = arc_points(center, outer, arc.start_angle, arc.end_angle);
    if inner > 0.0 {
        let mut hole = arc_points(center, inner, arc.start_angle, arc.end_angle);
        hole.reverse();
        points.extend(hole);
    } else {
        points.push(center);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_points_stay_on_radius() {
        let arc = ArcGeometry {
            start_angle: 0.0,
            end_angle: TAU / 4.0,
        };
        let pts = sector_outline((50.0, 50.0), 0.0, 40.0, &arc);
        assert_eq!(*pts.last().unwrap(), (50.0, 50.0));
        for p in &pts[..pts.len() - 1] {
            let d = ((p.0 - 50.0).powi(2) + (p.1 - 50.0).powi(2)).sqrt();
            assert!((d - 40.0).abs() < 1e-9);
        }
        // Starts at twelve o'clock.
        assert!((pts[0].0 - 50.0).abs() < 1e-9 && (pts[0].1 - 10.0).abs() < 1e-9);
    }
}
