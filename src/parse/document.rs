//! Total document parsing.
//!
//! The editor must always come up with something renderable, so parsing
//! absorbs every failure: malformed JSON, wrong top-level shape, and
//! missing fields all degrade to the default skeleton instead of
//! surfacing an error.

use serde_json::Value;

use crate::model::{now_millis, Document, DOCUMENT_VERSION};

use super::options::NormalizeOptions;
use super::section::normalize_section;

/// Parse a document from a JSON string.
///
/// Total: any string, including empty or malformed input, yields a valid
/// document with at least one section.
pub fn parse_str(input: &str, options: &NormalizeOptions) -> Document {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => parse_value(&value, options),
        Err(err) => {
            log::debug!("unparsable document JSON, using skeleton: {}", err);
            Document::skeleton()
        }
    }
}

/// Parse a document from an already-decoded JSON value.
///
/// A value without a non-empty `sections` array yields the skeleton;
/// otherwise `time` and `version` are preserved when present and each
/// raw section is normalized in order.
pub fn parse_value(value: &Value, options: &NormalizeOptions) -> Document {
    let Some(Value::Array(raw_sections)) = value.get("sections") else {
        log::debug!("document JSON has no sections array, using skeleton");
        return Document::skeleton();
    };
    if raw_sections.is_empty() {
        log::debug!("document JSON has empty sections array, using skeleton");
        return Document::skeleton();
    }

    let time = value
        .get("time")
        .and_then(Value::as_i64)
        .unwrap_or_else(now_millis);
    let version = value
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| DOCUMENT_VERSION.to_string());
    let sections = raw_sections
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_section(raw, index, options))
        .collect();

    Document {
        time,
        version,
        sections,
    }
}
