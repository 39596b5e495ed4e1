//! In-memory vector scene produced by renderers, prior to serialization.
//!
//! Coordinates are absolute pixels on the chart canvas (margins already applied).

use crate::style::Rgb8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Rgb8,
    pub opacity: f64,
}

impl Fill {
    pub fn solid(color: Rgb8) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: f64,
    pub opacity: f64,
}

impl Stroke {
    pub fn new(color: Rgb8, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Fill,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Fill,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Fill,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font_px: f64,
        color: Rgb8,
        anchor: TextAnchor,
    },
}

/// Drawable primitives in paint order plus the canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorScene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl VectorScene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
    }
}
