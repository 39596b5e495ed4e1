//! Renderer registry: one pure render function per [`ChartKind`].
//!
//! Every renderer has the signature [`RenderFn`] and derives whatever scales
//! and layout it needs from its arguments alone, so identical inputs always
//! yield identical scenes.

pub mod arc;
pub mod bar;
pub mod legend;
pub mod metrics;
pub mod network;
pub mod pattern;
pub mod text;
pub mod tree;
pub mod wordcloud;

use crate::models::{ChartKind, DataRecord, Dimensions};
use crate::scene::VectorScene;
use crate::style::Rgb8;

/// `(records, dimensions, fill color) -> scene`.
pub type RenderFn = fn(&[DataRecord], &Dimensions, Rgb8) -> VectorScene;

/// Look up the renderer for a chart kind.
pub fn renderer_for(kind: ChartKind) -> RenderFn {
    match kind {
        ChartKind::Bar => bar::render,
        ChartKind::Pie => arc::render_pie,
        ChartKind::Donut => arc::render_donut,
        ChartKind::Network => network::render,
        ChartKind::Tree => tree::render,
        ChartKind::Wordcloud => wordcloud::render,
        ChartKind::Legend => legend::render,
        ChartKind::Pattern => pattern::render,
        ChartKind::Text => text::render,
    }
}

/// Render `records` with the renderer registered for `kind`.
pub fn render_kind(
    kind: ChartKind,
    records: &[DataRecord],
    dims: &Dimensions,
    color: Rgb8,
) -> VectorScene {
    log::debug!("rendering {} chart with {} records", kind, records.len());
    renderer_for(kind)(records, dims, color)
}

/// Radius for a value, area-proportional to `value / max`, within `[min_r, max_r]`.
/// Non-positive values get `min_r`.
pub(crate) fn scaled_radius(value: f64, max: f64, min_r: f64, max_r: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return min_r;
    }
    (min_r + (max_r - min_r) * (value / max).sqrt()).clamp(min_r, max_r)
}

/// Largest value in the records, or 0 for an empty slice.
pub(crate) fn max_value(records: &[DataRecord]) -> f64 {
    records.iter().map(|r| r.value).fold(0.0, f64::max)
}
