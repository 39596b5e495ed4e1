//! Input validation and normalization into canonical [`DataRecord`]s.
//!
//! Accepted shapes for the `data` array:
//! - plain numbers: `[120, 80, 100]` → labels `"0"`, `"1"`, `"2"`
//! - records: `[{"label": "a", "value": 1}, {"value": 2}]` → labels `Some("a")`, `None`
//!
//! Both may be mixed in one array. Output order always equals input order.

use serde_json::Value;

use crate::error::ValidationError;
use crate::models::{ChartDocument, ChartKind, DataRecord};

/// Parse a tagged input document `{ "type": <kind>, "data": [...] }`.
///
/// ### Errors
/// - malformed JSON
/// - `type` or `data` missing (or null / empty `type`)
/// - `type` is not a known [`ChartKind`]
/// - `data` fails [`normalize`]
pub fn parse_document(text: &str) -> Result<ChartDocument, ValidationError> {
    let doc: Value = serde_json::from_str(text)?;
    document_from_value(&doc)
}

/// Same as [`parse_document`] for an already-decoded JSON value.
pub fn document_from_value(doc: &Value) -> Result<ChartDocument, ValidationError> {
    let kind = doc.get("type").filter(|v| !is_blank(v));
    let data = doc.get("data").filter(|v| !v.is_null());
    let (Some(kind), Some(data)) = (kind, data) else {
        return Err(ValidationError::MissingFields);
    };

    let kind = match kind {
        Value::String(s) => s.parse::<ChartKind>()?,
        other => return Err(ValidationError::UnsupportedKind(other.to_string())),
    };
    let records = normalize(data)?;
    log::debug!("parsed {} document with {} records", kind, records.len());
    Ok(ChartDocument { kind, records })
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Convert a JSON `data` array into canonical records.
pub fn normalize(raw: &Value) -> Result<Vec<DataRecord>, ValidationError> {
    let items = raw.as_array().ok_or(ValidationError::NotSequence)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_item(index, item))
        .collect()
}

fn normalize_item(index: usize, item: &Value) -> Result<DataRecord, ValidationError> {
    let invalid = |reason| ValidationError::InvalidElement { index, reason };
    match item {
        Value::Number(n) => {
            let value = n.as_f64().filter(|v| v.is_finite()).ok_or(invalid("number is not finite"))?;
            Ok(DataRecord::new(index.to_string(), value))
        }
        Value::Object(map) => {
            let value = match map.get("value") {
                Some(Value::Number(n)) => n
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .ok_or(invalid("value is not finite"))?,
                Some(_) => return Err(invalid("value is not a number")),
                None => return Err(invalid("record has no value")),
            };
            let label = match map.get("label") {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(_) => return Err(invalid("label is not a string")),
            };
            Ok(DataRecord { label, value })
        }
        _ => Err(invalid("expected a number or an object with a numeric value")),
    }
}

/// Normalize a programmatic sequence of plain numbers.
pub fn normalize_values(values: &[f64]) -> Result<Vec<DataRecord>, ValidationError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value.is_finite() {
                Ok(DataRecord::new(index.to_string(), value))
            } else {
                Err(ValidationError::InvalidElement {
                    index,
                    reason: "number is not finite",
                })
            }
        })
        .collect()
}
