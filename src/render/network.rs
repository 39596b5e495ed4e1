//! Network: nodes on a circle, consecutive nodes joined into a ring.
//!
//! The layout is closed-form (no force simulation) so output is reproducible.

use std::f64::consts::TAU;

use crate::models::{DataRecord, Dimensions};
use crate::scene::{Fill, Primitive, Stroke, VectorScene};
use crate::style::{GRID_COLOR, Rgb8};

use super::{max_value, scaled_radius};

const NODE_MIN_RADIUS: f64 = 4.0;
const NODE_MAX_RADIUS: f64 = 14.0;

/// Node centers for `n` nodes evenly spaced on a circle, first node at twelve o'clock.
pub fn node_positions(n: usize, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    if n == 1 {
        return vec![center];
    }
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (center.0 + radius * angle.sin(), center.1 - radius * angle.cos())
        })
        .collect()
}

/// Index pairs of the ring edges: none for fewer than two nodes, one for two.
pub fn ring_edges(n: usize) -> Vec<(usize, usize)> {
    match n {
        0 | 1 => Vec::new(),
        2 => vec![(0, 1)],
        _ => (0..n).map(|i| (i, (i + 1) % n)).collect(),
    }
}

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let center = (
        dims.margin.left + inner_w / 2.0,
        dims.margin.top + inner_h / 2.0,
    );
    let radius = (inner_w.min(inner_h) / 2.0 - NODE_MAX_RADIUS).max(0.0);
    let nodes = node_positions(records.len(), center, radius);

    let edge = Stroke::new(GRID_COLOR, 1.0);
    for (a, b) in ring_edges(records.len()) {
        scene.push(Primitive::Polyline {
            points: vec![nodes[a], nodes[b]],
            stroke: edge,
        });
    }

    let max = max_value(records);
    for (record, node) in records.iter().zip(&nodes) {
        scene.push(Primitive::Circle {
            cx: node.0,
            cy: node.1,
            r: scaled_radius(record.value, max, NODE_MIN_RADIUS, NODE_MAX_RADIUS),
            fill: Fill::solid(color),
        });
    }
    scene
}
