//! Serialize a [`VectorScene`] into a self-contained SVG document.
//!
//! Coordinates are written with full `f64` precision (shortest round-trip
//! form), so parsing the document back yields exactly the scene geometry.

use std::fmt::Write;

use crate::error::{ChartError, Result};
use crate::scene::{Fill, Primitive, Stroke, TextAnchor, VectorScene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "sans-serif";

/// Render the scene into an SVG string.
///
/// Output always carries the SVG namespace and escaped text, so a host parser
/// sees exactly the primitives in the scene. Primitives with non-finite
/// coordinates are skipped.
pub fn to_svg_string(scene: &VectorScene) -> Result<String> {
    let (w, h) = (canvas_extent(scene.width), canvas_extent(scene.height));
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}">"#
    )
    .map_err(export_err)?;
    let mut skipped = 0usize;
    for primitive in &scene.primitives {
        if !is_finite(primitive) {
            skipped += 1;
            continue;
        }
        write_primitive(&mut out, primitive).map_err(export_err)?;
    }
    out.push_str("</svg>\n");
    if skipped > 0 {
        log::warn!("skipped {skipped} primitives with non-finite coordinates");
    }
    log::debug!("serialized {} primitives into {} bytes of SVG", scene.len(), out.len());
    Ok(out)
}

fn export_err(e: std::fmt::Error) -> ChartError {
    ChartError::Export(format!("{e:?}"))
}

fn canvas_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn is_finite(primitive: &Primitive) -> bool {
    let pts_ok = |pts: &[(f64, f64)]| pts.iter().all(|p| p.0.is_finite() && p.1.is_finite());
    match primitive {
        Primitive::Rect {
            x, y, width, height, ..
        } => [x, y, width, height].iter().all(|v| v.is_finite()),
        Primitive::Polygon { points, .. } | Primitive::Polyline { points, .. } => pts_ok(points),
        Primitive::Circle { cx, cy, r, .. } => [cx, cy, r].iter().all(|v| v.is_finite()),
        Primitive::Text { x, y, font_px, .. } => [x, y, font_px].iter().all(|v| v.is_finite()),
    }
}

fn write_primitive(out: &mut String, primitive: &Primitive) -> std::fmt::Result {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            // Normalize corners so negative extents never reach the document.
            let x0 = if *width < 0.0 { x + width } else { *x };
            let y0 = if *height < 0.0 { y + height } else { *y };
            write!(
                out,
                r#"<rect x="{x0}" y="{y0}" width="{}" height="{}""#,
                width.abs(),
                height.abs()
            )?;
            write_fill(out, fill)?;
            out.push_str("/>\n");
        }
        Primitive::Polygon { points, fill } => {
            if points.len() >= 3 {
                out.push_str(r#"<polygon points=""#);
                write_points(out, points)?;
                out.push('"');
                write_fill(out, fill)?;
                out.push_str("/>\n");
            }
        }
        Primitive::Circle { cx, cy, r, fill } => {
            if *r > 0.0 {
                write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}""#)?;
                write_fill(out, fill)?;
                out.push_str("/>\n");
            }
        }
        Primitive::Polyline { points, stroke } => {
            if points.len() >= 2 {
                out.push_str(r#"<polyline points=""#);
                write_points(out, points)?;
                out.push_str(r#"" fill="none""#);
                write_stroke(out, stroke)?;
                out.push_str("/>\n");
            }
        }
        Primitive::Text {
            x,
            y,
            text,
            font_px,
            color,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            writeln!(
                out,
                r#"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{font_px}" dominant-baseline="middle" text-anchor="{anchor}" fill="{}">{}</text>"#,
                color.to_hex(),
                escape_xml(text)
            )?;
        }
    }
    Ok(())
}

fn write_points(out: &mut String, points: &[(f64, f64)]) -> std::fmt::Result {
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{x},{y}")?;
    }
    Ok(())
}

fn write_fill(out: &mut String, fill: &Fill) -> std::fmt::Result {
    write!(out, r#" fill="{}""#, fill.color.to_hex())?;
    if fill.opacity < 1.0 {
        write!(out, r#" fill-opacity="{}""#, fill.opacity.max(0.0))?;
    }
    Ok(())
}

fn write_stroke(out: &mut String, stroke: &Stroke) -> std::fmt::Result {
    write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        stroke.width.max(0.0)
    )?;
    if stroke.opacity < 1.0 {
        write!(out, r#" stroke-opacity="{}""#, stroke.opacity.max(0.0))?;
    }
    Ok(())
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
