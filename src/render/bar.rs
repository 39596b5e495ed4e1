//! Bar chart: band scale along x, linear value scale along y, grid rows behind.

use crate::layout::{BarGeometry, layout_bars};
use crate::models::{DataRecord, Dimensions};
use crate::scale::{BandScale, DEFAULT_PADDING, DEFAULT_TICK_COUNT, LinearScale};
use crate::scene::{Fill, Primitive, Stroke, VectorScene};
use crate::style::{GRID_COLOR, Rgb8};

const GRID_OPACITY: f64 = 0.2;

/// Scales and geometry of a bar chart, in plot-area coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub band: BandScale,
    pub linear: LinearScale,
    pub bars: Vec<BarGeometry>,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Derive band + linear scales from the records and lay out one bar per record.
pub fn bar_layout(records: &[DataRecord], dims: &Dimensions) -> BarLayout {
    let inner_width = dims.inner_width();
    let inner_height = dims.inner_height();
    let band = BandScale::new(records.iter().map(|r| r.display_label()), (0.0, inner_width))
        .with_padding(DEFAULT_PADDING);
    let linear = LinearScale::for_values(records.iter().map(|r| r.value), (inner_height, 0.0), true);
    let bars = layout_bars(records, &band, &linear, inner_height);
    BarLayout {
        band,
        linear,
        bars,
        inner_width,
        inner_height,
    }
}

pub fn render(records: &[DataRecord], dims: &Dimensions, color: Rgb8) -> VectorScene {
    let layout = bar_layout(records, dims);
    let (ox, oy) = (dims.margin.left, dims.margin.top);
    let mut scene = VectorScene::new(dims.width, dims.height);

    if layout.inner_width <= 0.0 || layout.inner_height <= 0.0 {
        log::debug!(
            "plot area is empty ({}x{}); nothing drawn",
            layout.inner_width,
            layout.inner_height
        );
        return scene;
    }

    let grid = Stroke::new(GRID_COLOR, 1.0).with_opacity(GRID_OPACITY);
    for tick in layout.linear.ticks(DEFAULT_TICK_COUNT) {
        let y = oy + layout.linear.map(tick);
        scene.push(Primitive::Polyline {
            points: vec![(ox, y), (ox + layout.inner_width, y)],
            stroke: grid,
        });
    }

    for (i, bar) in layout.bars.iter().enumerate() {
        // Clip to the plot area; bars for negative values fall below it entirely.
        let top = bar.y.min(bar.y + bar.height).max(0.0);
        let bottom = bar.y.max(bar.y + bar.height).min(layout.inner_height);
        if bottom <= top {
            if bar.height < 0.0 {
                log::warn!(
                    "bar {} ({}) lies below the baseline and was clipped",
                    i,
                    records[i].display_label()
                );
            }
            continue;
        }
        scene.push(Primitive::Rect {
            x: ox + bar.x,
            y: oy + top,
            width: bar.width,
            height: bottom - top,
            fill: Fill::solid(color),
        });
    }
    scene
}
