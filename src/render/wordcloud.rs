//! Word cloud: labels sized by value, flowed greedily into centered rows.

use crate::models::{DataRecord, Dimensions};
use crate::scene::{Primitive, TextAnchor, VectorScene};
use crate::style::Rgb8;

use super::metrics::{estimate_text_width_px, format_value};

pub const MIN_FONT_PX: f64 = 10.0;
pub const MAX_FONT_PX: f64 = 36.0;
const WORD_GAP_PX: f64 = 8.0;
const LINE_HEIGHT: f64 = 1.2;

/// A placed word: left edge, row center, font size.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_px: f64,
}

/// Font size linear in value between the smallest and largest record.
pub fn font_size(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return (MIN_FONT_PX + MAX_FONT_PX) / 2.0;
    }
    MIN_FONT_PX + (MAX_FONT_PX - MIN_FONT_PX) * ((value - min) / (max - min))
}

/// Place words in record order; words that no longer fit vertically are dropped.
pub fn place_words(records: &[DataRecord], dims: &Dimensions) -> Vec<PlacedWord> {
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let (min, max) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.value), hi.max(r.value))
    });

    let mut rows: Vec<Vec<(String, f64, f64)>> = Vec::new();
    let mut row: Vec<(String, f64, f64)> = Vec::new();
    let mut row_w = 0.0;
    for record in records {
        let text = match record.display_label() {
            "" => format_value(record.value),
            l => l.to_string(),
        };
        let font_px = font_size(record.value, min, max);
        let w = estimate_text_width_px(&text, font_px);
        let needed = if row.is_empty() { w } else { row_w + WORD_GAP_PX + w };
        if needed > inner_w && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_w = w;
        } else {
            row_w = needed;
        }
        row.push((text, font_px, w));
    }
    if !row.is_empty() {
        rows.push(row);
    }

    let mut placed = Vec::new();
    let mut y_top = dims.margin.top;
    for row in rows {
        let row_h = row.iter().map(|(_, f, _)| *f).fold(0.0, f64::max) * LINE_HEIGHT;
        if y_top + row_h > dims.margin.top + inner_h {
            log::debug!("wordcloud ran out of vertical space after {} words", placed.len());
            break;
        }
        let total_w: f64 =
            row.iter().map(|(_, _, w)| *w).sum::<f64>() + WORD_GAP_PX * (row.len() - 1) as f64;
        let mut x = dims.margin.left + ((inner_w - total_w) / 2.0).max(0.0);
        for (text, font_px, w) in row {
            placed.push(PlacedWord {
                text,
                x,
                y: y_top + row_h / 2.0,
                font_px,
            });
            x += w + WORD_GAP_PX;
        }
        y_top += row_h;
    }
    placed
}

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    for word in place_words(records, dims) {
        scene.push(Primitive::Text {
            x: word.x,
            y: word.y,
            text: word.text,
            font_px: word.font_px,
            color,
            anchor: TextAnchor::Start,
        });
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_spans_configured_range() {
        assert_eq!(font_size(0.0, 0.0, 10.0), MIN_FONT_PX);
        assert_eq!(font_size(10.0, 0.0, 10.0), MAX_FONT_PX);
        assert_eq!(font_size(3.0, 3.0, 3.0), (MIN_FONT_PX + MAX_FONT_PX) / 2.0);
    }

    #[test]
    fn words_wrap_within_width() {
        let recs: Vec<DataRecord> = (0..12)
            .map(|i| DataRecord::new(format!("word{i}"), i as f64))
            .collect();
        let dims = Dimensions::new(300.0, 600.0);
        let placed = place_words(&recs, &dims);
        assert_eq!(placed.len(), 12);
        for w in &placed {
            let right = w.x + estimate_text_width_px(&w.text, w.font_px);
            assert!(w.x >= dims.margin.left);
            assert!(right <= dims.width - dims.margin.right + 1e-9);
        }
    }
}
