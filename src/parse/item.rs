//! Item normalization.
//!
//! Turns one loosely-shaped input object into a canonical [`Item`].
//! Input is author-controlled and not schema-validated, so every path
//! degrades to empty or default values instead of failing.

use serde_json::{Map, Value};

use crate::extract::extract_paint_ids;
use crate::model::{ImageRef, Item, ItemKind, StepDetail};

use super::fields::{
    first_string, has_any, paint_id_list, positive_int, string_or_empty, HEADER_TEXT_FIELDS,
    IMAGE_MARKER_FIELDS, TEXT_FIELDS,
};
use super::options::{NormalizeOptions, UnknownKind};

/// Normalize one loose input value into a canonical item.
///
/// Returns `None` only when the item's `type` tag is unrecognized and
/// the options say to drop such items; with default options this
/// function is total.
pub fn normalize_item(value: &Value, options: &NormalizeOptions) -> Option<Item> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let kind = resolve_kind(obj, options)?;
    Some(match kind {
        ItemKind::Header => Item::Header {
            text: string_or_empty(obj, HEADER_TEXT_FIELDS),
        },
        ItemKind::Text => {
            let (text, paint_ids) = resolve_text_and_ids(obj);
            Item::Text { text, paint_ids }
        }
        ItemKind::Step => {
            let (text, paint_ids) = resolve_text_and_ids(obj);
            let steps = resolve_steps(obj, &text, &paint_ids);
            Item::Step {
                text,
                paint_ids,
                steps,
            }
        }
        ItemKind::Image => {
            let image = resolve_image(obj);
            if image.is_none() && has_any(obj, IMAGE_MARKER_FIELDS) {
                log::warn!("dropping image item with invalid attachment reference");
            }
            Item::Image { image }
        }
    })
}

/// Determine the kind of a loose item.
///
/// An explicit recognized `type` tag wins. Untagged items are inferred
/// as images when an image-like field is present, otherwise they take
/// the fallback kind. Unrecognized tags follow the unknown-kind policy;
/// coercing them to the fallback kind is a compatibility shim for
/// historical inputs, not a validated contract.
fn resolve_kind(obj: &Map<String, Value>, options: &NormalizeOptions) -> Option<ItemKind> {
    match obj.get("type") {
        Some(Value::String(tag)) => match ItemKind::from_tag(tag) {
            Some(kind) => Some(kind),
            None => match options.unknown_kinds {
                UnknownKind::Coerce => {
                    log::debug!("coercing unknown item type {:?} to fallback kind", tag);
                    Some(options.fallback_kind)
                }
                UnknownKind::Drop => None,
            },
        },
        Some(_) => match options.unknown_kinds {
            UnknownKind::Coerce => Some(options.fallback_kind),
            UnknownKind::Drop => None,
        },
        None if has_any(obj, IMAGE_MARKER_FIELDS) => Some(ItemKind::Image),
        None => Some(options.fallback_kind),
    }
}

/// Resolve the text field and its paint IDs.
///
/// Explicit `paintIds` entries win when any survive coercion; otherwise
/// IDs are extracted from the resolved text.
fn resolve_text_and_ids(obj: &Map<String, Value>) -> (String, Vec<u32>) {
    let text = string_or_empty(obj, TEXT_FIELDS);
    let explicit = paint_id_list(obj.get("paintIds"));
    let paint_ids = if explicit.is_empty() {
        extract_paint_ids(&text)
    } else {
        explicit
    };
    (text, paint_ids)
}

/// Resolve the sub-steps of a step item.
///
/// A non-empty `steps` array is normalized entry by entry; anything else
/// synthesizes exactly one step from the item's own text and IDs.
fn resolve_steps(obj: &Map<String, Value>, fallback_text: &str, fallback_ids: &[u32]) -> Vec<StepDetail> {
    match obj.get("steps") {
        Some(Value::Array(raw)) if !raw.is_empty() => raw
            .iter()
            .enumerate()
            .map(|(index, value)| normalize_step_detail(value, index, fallback_text))
            .collect(),
        _ => vec![StepDetail::new(
            StepDetail::default_title(1),
            fallback_text,
            fallback_ids.to_vec(),
        )],
    }
}

/// Normalize one sub-step entry.
fn normalize_step_detail(value: &Value, index: usize, fallback_text: &str) -> StepDetail {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let title = match first_string(obj, &["title"]) {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => StepDetail::default_title(index + 1),
    };
    let text = match first_string(obj, TEXT_FIELDS) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => fallback_text.to_string(),
    };
    let explicit = paint_id_list(obj.get("paintIds"));
    let paint_ids = if explicit.is_empty() {
        extract_paint_ids(&text)
    } else {
        explicit
    };
    StepDetail { title, text, paint_ids }
}

/// Resolve an image reference from a loose item.
///
/// Prefers the nested `image` object; otherwise the item's own
/// top-level `attachmentId`/`alt`/`caption` fields are used. A
/// non-positive or non-numeric attachment ID yields `None`.
fn resolve_image(obj: &Map<String, Value>) -> Option<ImageRef> {
    match obj.get("image") {
        Some(Value::Object(image)) => image_ref_from(image),
        _ => image_ref_from(obj),
    }
}

fn image_ref_from(obj: &Map<String, Value>) -> Option<ImageRef> {
    let id = obj.get("attachmentId").and_then(positive_int)?;
    ImageRef::new(
        id,
        string_or_empty(obj, &["alt"]),
        string_or_empty(obj, &["caption"]),
    )
}
