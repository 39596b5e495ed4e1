//! Text chart: each record as a centered "label: value" line.

use crate::models::{DataRecord, Dimensions};
use crate::scene::{Primitive, TextAnchor, VectorScene};
use crate::style::Rgb8;

use super::metrics::{label_with_value, truncate_to_width};

const FONT_PX: f64 = 16.0;
const LINE_PX: f64 = 24.0;

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let inner_h = dims.inner_height();
    let center_x = dims.margin.left + dims.inner_width() / 2.0;
    let visible = ((inner_h / LINE_PX).floor().max(0.0) as usize).min(records.len());
    // Vertically center the block of lines that fits.
    let block = LINE_PX * visible as f64;
    let top = dims.margin.top + (inner_h - block) / 2.0;

    for (i, record) in records.iter().take(visible).enumerate() {
        let line = label_with_value(record.display_label(), record.value);
        scene.push(Primitive::Text {
            x: center_x,
            y: top + LINE_PX * (i as f64 + 0.5),
            text: truncate_to_width(&line, FONT_PX, dims.inner_width()),
            font_px: FONT_PX,
            color,
            anchor: TextAnchor::Middle,
        });
    }
    scene
}
