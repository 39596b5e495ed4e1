//! Legend: one swatch + "label: value" row per record.

use crate::models::{DataRecord, Dimensions};
use crate::scene::{Fill, Primitive, Stroke, TextAnchor, VectorScene};
use crate::style::{BLACK, GRID_COLOR, Rgb8};

use super::metrics::{label_with_value, truncate_to_width};

const SWATCH_PX: f64 = 12.0;
const ROW_PX: f64 = 20.0;
const SWATCH_TO_TEXT_GAP: f64 = 8.0;
const FONT_PX: f64 = 12.0;

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let (ox, oy) = (dims.margin.left, dims.margin.top);
    let text_x = ox + SWATCH_PX + SWATCH_TO_TEXT_GAP;
    let text_cap = dims.inner_width() - SWATCH_PX - SWATCH_TO_TEXT_GAP;

    for (i, record) in records.iter().enumerate() {
        let row_top = oy + ROW_PX * i as f64;
        // Rows that would spill past the plot area are dropped.
        if row_top + ROW_PX > oy + dims.inner_height() {
            log::debug!("legend truncated after {} of {} rows", i, records.len());
            break;
        }
        let swatch_y = row_top + (ROW_PX - SWATCH_PX) / 2.0;
        scene.push(Primitive::Rect {
            x: ox,
            y: swatch_y,
            width: SWATCH_PX,
            height: SWATCH_PX,
            fill: Fill::solid(color),
        });
        // Outline keeps light swatches visible on a white canvas.
        scene.push(Primitive::Polyline {
            points: vec![
                (ox, swatch_y),
                (ox + SWATCH_PX, swatch_y),
                (ox + SWATCH_PX, swatch_y + SWATCH_PX),
                (ox, swatch_y + SWATCH_PX),
                (ox, swatch_y),
            ],
            stroke: Stroke::new(GRID_COLOR, 1.0),
        });

        let label = truncate_to_width(
            &label_with_value(record.display_label(), record.value),
            FONT_PX,
            text_cap,
        );
        if !label.is_empty() {
            scene.push(Primitive::Text {
                x: text_x,
                y: row_top + ROW_PX / 2.0,
                text: label,
                font_px: FONT_PX,
                color: BLACK,
                anchor: TextAnchor::Start,
            });
        }
    }
    scene
}
