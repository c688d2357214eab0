//! Fallback field tables for loose input.
//!
//! Author-controlled input is duck-typed: the same logical field arrives
//! under several historical names. Each logical field has one ordered
//! lookup table here, so the fallback order is a named, testable fact
//! rather than a scatter of per-call-site lookups.

use serde_json::{Map, Value};

/// Lookup order for the text of a plain text or step item.
pub const TEXT_FIELDS: &[&str] = &["text", "body", "content"];

/// Lookup order for the text of a header item.
pub const HEADER_TEXT_FIELDS: &[&str] = &["text", "header", "body"];

/// Fields whose presence marks an untagged item as image-like.
pub const IMAGE_MARKER_FIELDS: &[&str] = &["image", "attachmentId"];

/// First string value found under any of `keys`, in table order.
pub fn first_string<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| obj.get(*key)?.as_str())
}

/// String at `keys`, or the empty string.
pub fn string_or_empty(obj: &Map<String, Value>, keys: &[&str]) -> String {
    first_string(obj, keys).unwrap_or_default().to_string()
}

/// Whether any of `keys` is present, regardless of value shape.
pub fn has_any(obj: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| obj.contains_key(*key))
}

/// Coerce a value to a positive integer.
///
/// Accepts JSON numbers and numeric strings; anything else, and zero or
/// negative values, yield `None`.
pub fn positive_int(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().filter(|&n| n > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|&n| n > 0),
        _ => None,
    }
}

/// Coerce an optional `paintIds`-style array into a deduplicated ID list.
///
/// Elements that fail [`positive_int`] coercion are skipped; order of
/// first occurrence is preserved. A missing or non-array value yields an
/// empty list.
pub fn paint_id_list(value: Option<&Value>) -> Vec<u32> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    let mut ids = Vec::new();
    for entry in entries {
        if let Some(id) = positive_int(entry).and_then(|n| u32::try_from(n).ok()) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}
