//! Collect-for-save serialization.
//!
//! Walks a canonical document back into the minimal wire JSON the
//! catalog API accepts. Blocks the author left empty are pruned, blank
//! optional fields are omitted, and step paint IDs are re-derived from
//! text so the output is canonical rather than a passthrough of stored
//! state.

use serde_json::{json, Map, Value};

use crate::extract::extract_paint_ids;
use crate::model::{Document, ImageRef, Item, Section, StepDetail};
use crate::parse::NormalizeOptions;

/// Serialize a document to its wire JSON value.
///
/// Sections are emitted unconditionally with trimmed titles; items with
/// no remaining content are dropped.
pub fn to_wire_value(doc: &Document, options: &NormalizeOptions) -> Value {
    let sections: Vec<Value> = doc
        .sections
        .iter()
        .map(|section| wire_section(section, options))
        .collect();

    json!({
        "time": doc.time,
        "version": doc.version,
        "sections": sections,
    })
}

fn wire_section(section: &Section, options: &NormalizeOptions) -> Value {
    let items: Vec<Value> = section
        .items
        .iter()
        .filter_map(|item| wire_item(item, options))
        .collect();

    json!({
        "title": section.title.trim(),
        "items": items,
    })
}

/// Emit one item, or `None` when it has no content worth saving.
fn wire_item(item: &Item, options: &NormalizeOptions) -> Option<Value> {
    match item {
        Item::Header { text } => {
            if text.trim().is_empty() {
                return None;
            }
            Some(json!({"type": "header", "text": text}))
        }
        Item::Text { text, paint_ids } => {
            let ids = resolve_ids(text, paint_ids, false);
            if text.trim().is_empty() && ids.is_empty() {
                return None;
            }
            let mut obj = Map::new();
            obj.insert("type".to_string(), json!("text"));
            obj.insert("text".to_string(), json!(text));
            if !ids.is_empty() {
                obj.insert("paintIds".to_string(), json!(ids));
            }
            Some(Value::Object(obj))
        }
        Item::Step {
            text,
            paint_ids,
            steps,
        } => {
            let ids = resolve_ids(text, paint_ids, false);
            if text.trim().is_empty() && ids.is_empty() {
                return None;
            }
            let wire_steps: Vec<Value> = steps
                .iter()
                .enumerate()
                .map(|(index, step)| wire_step_detail(step, index, text, options))
                .collect();
            let mut obj = Map::new();
            obj.insert("type".to_string(), json!("step"));
            obj.insert("text".to_string(), json!(text));
            if !ids.is_empty() {
                obj.insert("paintIds".to_string(), json!(ids));
            }
            obj.insert("steps".to_string(), Value::Array(wire_steps));
            Some(Value::Object(obj))
        }
        Item::Image { image } => image.as_ref().map(wire_image),
    }
}

fn wire_step_detail(
    step: &StepDetail,
    index: usize,
    parent_text: &str,
    options: &NormalizeOptions,
) -> Value {
    let title = if step.title.trim().is_empty() {
        StepDetail::default_title(index + 1)
    } else {
        step.title.clone()
    };
    let text = if step.text.trim().is_empty() {
        parent_text.to_string()
    } else {
        step.text.clone()
    };
    let ids = resolve_ids(&text, &step.paint_ids, options.canonicalize_step_ids);

    let mut obj = Map::new();
    obj.insert("title".to_string(), json!(title));
    obj.insert("text".to_string(), json!(text));
    if !ids.is_empty() {
        obj.insert("paintIds".to_string(), json!(ids));
    }
    Value::Object(obj)
}

fn wire_image(image: &ImageRef) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), json!("image"));
    obj.insert("attachmentId".to_string(), json!(image.attachment_id));
    if !image.alt.trim().is_empty() {
        obj.insert("alt".to_string(), json!(image.alt));
    }
    if !image.caption.trim().is_empty() {
        obj.insert("caption".to_string(), json!(image.caption));
    }
    Value::Object(obj)
}

/// Paint IDs to emit for a block of text.
///
/// When `reextract` is set the stored IDs are ignored and the list comes
/// from the text alone; otherwise stored IDs win and extraction is the
/// fallback.
fn resolve_ids(text: &str, stored: &[u32], reextract: bool) -> Vec<u32> {
    if reextract || stored.is_empty() {
        extract_paint_ids(text)
    } else {
        stored.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire(item: Item) -> Option<Value> {
        wire_item(&item, &NormalizeOptions::default())
    }

    #[test]
    fn test_blank_text_item_dropped() {
        let item = Item::Text {
            text: "   ".to_string(),
            paint_ids: vec![],
        };
        assert_eq!(wire(item), None);
    }

    #[test]
    fn test_token_only_text_item_kept() {
        let item = Item::Text {
            text: "{{paint:3}}".to_string(),
            paint_ids: vec![],
        };
        let value = wire(item).unwrap();
        assert_eq!(value["paintIds"], json!([3]));
    }

    #[test]
    fn test_blank_header_dropped() {
        let item = Item::Header {
            text: "  ".to_string(),
        };
        assert_eq!(wire(item), None);
    }

    #[test]
    fn test_empty_paint_ids_field_omitted() {
        let item = Item::Text {
            text: "plain prose".to_string(),
            paint_ids: vec![],
        };
        let value = wire(item).unwrap();
        assert!(value.get("paintIds").is_none());
    }

    #[test]
    fn test_step_ids_rederived_from_text() {
        let item = Item::Step {
            text: "Mix {{paint:1}}".to_string(),
            paint_ids: vec![1],
            steps: vec![StepDetail::new("Step 1", "Mix {{paint:1}}", vec![99])],
        };
        let value = wire(item).unwrap();
        assert_eq!(value["steps"][0]["paintIds"], json!([1]));
    }

    #[test]
    fn test_step_ids_trusted_when_configured() {
        let options = NormalizeOptions::new().trust_step_ids();
        let item = Item::Step {
            text: "Mix".to_string(),
            paint_ids: vec![4],
            steps: vec![StepDetail::new("Step 1", "Mix", vec![99])],
        };
        let value = wire_item(&item, &options).unwrap();
        assert_eq!(value["steps"][0]["paintIds"], json!([99]));
    }

    #[test]
    fn test_blank_step_fields_fall_back() {
        let item = Item::Step {
            text: "Base {{paint:2}}".to_string(),
            paint_ids: vec![2],
            steps: vec![StepDetail::new("", "", vec![])],
        };
        let value = wire(item).unwrap();
        assert_eq!(value["steps"][0]["title"], json!("Step 1"));
        assert_eq!(value["steps"][0]["text"], json!("Base {{paint:2}}"));
        assert_eq!(value["steps"][0]["paintIds"], json!([2]));
    }

    #[test]
    fn test_invalid_image_dropped() {
        assert_eq!(wire(Item::Image { image: None }), None);
    }

    #[test]
    fn test_image_blank_optionals_omitted() {
        let item = Item::Image {
            image: ImageRef::new(5, "", "  "),
        };
        let value = wire(item).unwrap();
        assert_eq!(value["attachmentId"], json!(5));
        assert!(value.get("alt").is_none());
        assert!(value.get("caption").is_none());
    }

    #[test]
    fn test_sections_emitted_even_when_empty() {
        let mut doc = Document::new();
        doc.add_section(Section::new("  Intro  "));
        let value = to_wire_value(&doc, &NormalizeOptions::default());
        assert_eq!(value["sections"][0]["title"], json!("Intro"));
        assert_eq!(value["sections"][0]["items"], json!([]));
    }
}
