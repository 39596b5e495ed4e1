//! The pure pipeline: `ChartConfig` → vector scene, composed from the
//! normalize → scale → layout → render stages.

use crate::models::{ChartKind, DataRecord, Dimensions};
use crate::normalize::normalize_values;
use crate::render::render_kind;
use crate::scene::VectorScene;
use crate::style::{DEFAULT_COLOR, Rgb8};

/// Built-in sample used until the user loads a document.
pub const SAMPLE_VALUES: [f64; 5] = [120.0, 80.0, 100.0, 70.0, 90.0];

/// Everything one render pass needs. Cheap to clone; never mutated by rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dimensions: Dimensions,
    pub color: Rgb8,
    pub records: Vec<DataRecord>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            dimensions: Dimensions::default(),
            color: DEFAULT_COLOR,
            records: sample_records(),
        }
    }
}

/// Records for [`SAMPLE_VALUES`], labeled "0".."4".
pub fn sample_records() -> Vec<DataRecord> {
    SAMPLE_VALUES
        .iter()
        .enumerate()
        .map(|(i, &v)| DataRecord::new(i.to_string(), v))
        .collect()
}

/// Build a config from plain numbers.
pub fn config_from_values(
    kind: ChartKind,
    values: &[f64],
    dimensions: Dimensions,
    color: Rgb8,
) -> crate::error::Result<ChartConfig> {
    Ok(ChartConfig {
        kind,
        dimensions,
        color,
        records: normalize_values(values)?,
    })
}

/// Render the config with the renderer registered for its kind.
pub fn render(config: &ChartConfig) -> VectorScene {
    render_kind(config.kind, &config.records, &config.dimensions, config.color)
}
