//! Control-panel session: the current [`ChartConfig`] plus the inline status
//! shown to the user (loaded file name, last error).
//!
//! Every fallible step ends in exactly one of two outcomes: the config is
//! replaced and the error cleared, or the error is set and the config is left
//! untouched.

use std::fs;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::export::{HostBridge, export_scene};
use crate::models::{ChartKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::normalize::parse_document;
use crate::pipeline::{ChartConfig, render};
use crate::scene::VectorScene;
use crate::style::PaletteColor;

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ChartConfig,
    file_name: Option<String>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Name of the most recently selected file, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Message to show inline, if the last load or export failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load a `.json` document from disk. The extension is checked before reading.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.file_name = Some(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
        self.error = None;

        let outcome = read_json_file(path).and_then(|text| self.apply_document(&text));
        self.record(outcome)
    }

    /// Load a document from already-read text.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.error = None;
        let outcome = self.apply_document(text);
        self.record(outcome)
    }

    fn apply_document(&mut self, text: &str) -> Result<()> {
        let doc = parse_document(text)?;
        log::info!("loaded {} chart with {} records", doc.kind, doc.records.len());
        self.config.kind = doc.kind;
        self.config.records = doc.records;
        Ok(())
    }

    fn record(&mut self, outcome: Result<()>) -> Result<()> {
        if let Err(e) = &outcome {
            log::warn!("{e}");
            self.error = Some(e.to_string());
        }
        outcome
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.config.kind = kind;
    }

    /// Width text field; unparsable or non-positive input falls back to 300.
    pub fn set_width_input(&mut self, input: &str) {
        self.config.dimensions.width = parse_dimension_input(input, DEFAULT_WIDTH);
    }

    /// Height text field; unparsable or non-positive input falls back to 300.
    pub fn set_height_input(&mut self, input: &str) {
        self.config.dimensions.height = parse_dimension_input(input, DEFAULT_HEIGHT);
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.config.color = color.rgb();
    }

    /// Render the current config. Pure with respect to the session.
    pub fn render(&self) -> VectorScene {
        render(&self.config)
    }

    /// Render and hand the document to the host.
    pub fn export(&mut self, host: &dyn HostBridge) -> Result<()> {
        let outcome = export_scene(&self.render(), host);
        self.record(outcome)
    }
}

fn read_json_file(path: &Path) -> Result<String> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "json");
    if !is_json {
        return Err(ChartError::NotJson {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Leading-integer parse of a size field (`"320px"` → 320); anything that does
/// not yield a positive integer gives `fallback`.
pub fn parse_dimension_input(input: &str, fallback: f64) -> f64 {
    let s = input.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    // f64 keeps the magnitude of digit runs too long for any integer type.
    match digits[..end].parse::<f64>() {
        Ok(n) if n > 0.0 && n.is_finite() && sign > 0.0 => n,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_input_mirrors_parse_int_fallback() {
        assert_eq!(parse_dimension_input("420", 300.0), 420.0);
        assert_eq!(parse_dimension_input(" 320px", 300.0), 320.0);
        assert_eq!(parse_dimension_input("12.9", 300.0), 12.0);
        assert_eq!(parse_dimension_input("", 300.0), 300.0);
        assert_eq!(parse_dimension_input("abc", 300.0), 300.0);
        assert_eq!(parse_dimension_input("0", 300.0), 300.0);
        assert_eq!(parse_dimension_input("-40", 300.0), 300.0);
        assert_eq!(parse_dimension_input("5000000000", 300.0), 5_000_000_000.0);
    }

    #[test]
    fn failed_load_keeps_previous_config() {
        let mut s = Session::new();
        s.load_str(r#"{"type": "pie", "data": [1, 2]}"#).unwrap();
        let before = s.config().clone();
        assert!(s.load_str(r#"{"type": "bogus", "data": [1]}"#).is_err());
        assert_eq!(s.config(), &before);
        assert_eq!(s.error(), Some("Unsupported chart type: bogus"));
    }
}
