use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default chart width and height in pixels.
pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;
/// Default margin applied on every side.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Chart kinds understood by the renderer registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Network,
    Tree,
    Wordcloud,
    Donut,
    Legend,
    Pattern,
    Text,
}

impl ChartKind {
    /// Every kind, in selector order.
    pub const ALL: [ChartKind; 9] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Network,
        ChartKind::Tree,
        ChartKind::Wordcloud,
        ChartKind::Donut,
        ChartKind::Legend,
        ChartKind::Pattern,
        ChartKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Network => "network",
            ChartKind::Tree => "tree",
            ChartKind::Wordcloud => "wordcloud",
            ChartKind::Donut => "donut",
            ChartKind::Legend => "legend",
            ChartKind::Pattern => "pattern",
            ChartKind::Text => "text",
        }
    }

    /// Capitalized name as shown in the kind selector ("Bar", "Wordcloud", ...).
    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedKind(s.to_string()))
    }
}

/// Canonical data row. `value` is always finite; order in a sequence is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub label: Option<String>,
    pub value: f64,
}

impl DataRecord {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub fn unlabeled(value: f64) -> Self {
        Self { label: None, value }
    }

    /// Label used for rendering and band lookup; missing labels become "".
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// Margins around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(DEFAULT_MARGIN)
    }
}

/// Declared chart size. Inner extents may come out non-positive; layout then
/// produces degenerate geometry instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A validated input document: chart kind plus normalized records.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocument {
    pub kind: ChartKind,
    pub records: Vec<DataRecord>,
}
