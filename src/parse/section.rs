//! Section normalization.

use serde_json::Value;

use crate::model::Section;

use super::item::normalize_item;
use super::options::NormalizeOptions;

/// Normalize one loose section at the given zero-based index.
///
/// The title falls back to `"Section {index+1}"` when absent or blank;
/// a missing or non-array `items` field yields an empty section.
pub fn normalize_section(value: &Value, index: usize, options: &NormalizeOptions) -> Section {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Section::default_title(index));

    let items = match value.get("items") {
        Some(Value::Array(raw)) => raw
            .iter()
            .filter_map(|item| normalize_item(item, options))
            .collect(),
        _ => Vec::new(),
    };

    Section { title, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, ItemKind};
    use serde_json::json;

    #[test]
    fn test_title_fallback_by_index() {
        let section = normalize_section(&json!({}), 2, &NormalizeOptions::default());
        assert_eq!(section.title, "Section 3");
        assert!(section.is_empty());
    }

    #[test]
    fn test_blank_title_falls_back() {
        let section = normalize_section(&json!({"title": "  "}), 0, &NormalizeOptions::default());
        assert_eq!(section.title, "Section 1");
    }

    #[test]
    fn test_items_mapped_through_normalizer() {
        let section = normalize_section(
            &json!({
                "title": "Intro",
                "items": [
                    {"type": "header", "text": "Supplies"},
                    {"text": "Use {{paint:9}}"},
                ],
            }),
            0,
            &NormalizeOptions::default(),
        );
        assert_eq!(section.title, "Intro");
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[0].kind(), ItemKind::Header);
        assert_eq!(
            section.items[1],
            Item::Text {
                text: "Use {{paint:9}}".to_string(),
                paint_ids: vec![9],
            }
        );
    }

    #[test]
    fn test_non_array_items_yield_empty_section() {
        let section = normalize_section(
            &json!({"title": "Intro", "items": "oops"}),
            0,
            &NormalizeOptions::default(),
        );
        assert!(section.is_empty());
    }
}
