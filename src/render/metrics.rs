//! Text measurement, truncation and value formatting for renderers.

use num_format::{Locale, ToFormattedString};

/// Heuristic: estimate the pixel width of `text` (no font metrics are available).
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    (text.chars().count() as f64 * font_px * 0.60).ceil()
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    if out.is_empty() {
        return out;
    }
    out.push('…');
    out
}

/// Human-readable value: thousands separators for whole numbers, otherwise up
/// to two decimals with trailing zeros trimmed.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return (v as i64).to_formatted_string(&Locale::en);
    }
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `"label: value"`, or just the value when the label is empty.
pub fn label_with_value(label: &str, value: f64) -> String {
    if label.is_empty() {
        format_value(value)
    } else {
        format!("{label}: {}", format_value(value))
    }
}
