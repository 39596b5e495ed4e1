//! Dot pattern: records laid out on a grid, dot area proportional to value.

use crate::models::{DataRecord, Dimensions};
use crate::scene::{Fill, Primitive, VectorScene};
use crate::style::Rgb8;

use super::max_value;

// Dots never touch their neighbours.
const FILL_RATIO: f64 = 0.9;

/// Grid shape for `n` cells: as square as possible, filled row by row.
pub fn grid_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    (cols, rows)
}

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let mut scene = VectorScene::new(dims.width, dims.height);
    let (cols, rows) = grid_shape(records.len());
    if cols == 0 {
        return scene;
    }
    let cell_w = dims.inner_width() / cols as f64;
    let cell_h = dims.inner_height() / rows as f64;
    let max_r = cell_w.min(cell_h) / 2.0 * FILL_RATIO;
    if max_r <= 0.0 {
        return scene;
    }
    let max = max_value(records);

    for (i, record) in records.iter().enumerate() {
        if record.value <= 0.0 || max <= 0.0 {
            continue;
        }
        let (col, row) = (i % cols, i / cols);
        scene.push(Primitive::Circle {
            cx: dims.margin.left + cell_w * (col as f64 + 0.5),
            cy: dims.margin.top + cell_h * (row as f64 + 0.5),
            r: max_r * (record.value / max).sqrt(),
            fill: Fill::solid(color),
        });
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_shape_is_near_square() {
        assert_eq!(grid_shape(0), (0, 0));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(5), (3, 2));
        assert_eq!(grid_shape(9), (3, 3));
        assert_eq!(grid_shape(10), (4, 3));
    }
}
