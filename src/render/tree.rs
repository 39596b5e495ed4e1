//! Tree: a root node with one leaf per record, leaves spread along a band scale.

use crate::models::{DataRecord, Dimensions};
use crate::scale::BandScale;
use crate::scene::{Fill, Primitive, Stroke, TextAnchor, VectorScene};
use crate::style::{BLACK, GRID_COLOR, Rgb8};

use super::metrics::truncate_to_width;
use super::{max_value, scaled_radius};

const ROOT_RADIUS: f64 = 6.0;
const LEAF_MIN_RADIUS: f64 = 3.0;
const LEAF_MAX_RADIUS: f64 = 10.0;
const LABEL_FONT_PX: f64 = 10.0;
const LABEL_GAP: f64 = 4.0;

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let (ox, oy) = (dims.margin.left, dims.margin.top);
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let root = (ox + inner_w / 2.0, oy + ROOT_RADIUS);
    let leaf_y = oy + inner_h - LEAF_MAX_RADIUS - LABEL_GAP - LABEL_FONT_PX;

    // Positional slots: duplicate labels still get their own leaf.
    let slots = BandScale::new((0..records.len()).map(|i| i.to_string()), (0.0, inner_w))
        .with_padding(0.0);
    let half_band = slots.bandwidth() / 2.0;
    let leaves: Vec<(f64, f64)> = (0..records.len())
        .map(|i| (ox + slots.position(i).unwrap_or(0.0) + half_band, leaf_y))
        .collect();

    let edge = Stroke::new(GRID_COLOR, 1.0);
    for leaf in &leaves {
        scene.push(Primitive::Polyline {
            points: vec![root, *leaf],
            stroke: edge,
        });
    }

    scene.push(Primitive::Circle {
        cx: root.0,
        cy: root.1,
        r: ROOT_RADIUS,
        fill: Fill::solid(color),
    });

    let max = max_value(records);
    for (record, leaf) in records.iter().zip(&leaves) {
        scene.push(Primitive::Circle {
            cx: leaf.0,
            cy: leaf.1,
            r: scaled_radius(record.value, max, LEAF_MIN_RADIUS, LEAF_MAX_RADIUS),
            fill: Fill::solid(color),
        });
        let label = truncate_to_width(record.display_label(), LABEL_FONT_PX, slots.bandwidth());
        if !label.is_empty() {
            scene.push(Primitive::Text {
                x: leaf.0,
                y: leaf.1 + LEAF_MAX_RADIUS + LABEL_GAP + LABEL_FONT_PX / 2.0,
                text: label,
                font_px: LABEL_FONT_PX,
                color: BLACK,
                anchor: TextAnchor::Middle,
            });
        }
    }
    scene
}
