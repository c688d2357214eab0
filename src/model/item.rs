//! Content block types.

use serde::{Deserialize, Serialize};

/// One content block within a section.
///
/// This is the canonical in-memory form: every variant is fully resolved
/// (fallback fields applied, paint IDs extracted, images validated). The
/// wire shape is produced by [`crate::render::to_wire_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    /// A section-level heading line.
    Header {
        /// Heading text
        text: String,
    },

    /// A prose block, optionally referencing catalog paints.
    Text {
        /// Prose content, may embed `{{paint:N}}` tokens
        text: String,
        /// Referenced paint IDs, first-occurrence order, deduplicated
        #[serde(rename = "paintIds")]
        paint_ids: Vec<u32>,
    },

    /// A how-to block with an ordered list of sub-steps.
    Step {
        /// Lead-in text for the whole step block
        text: String,
        /// Referenced paint IDs for the lead-in text
        #[serde(rename = "paintIds")]
        paint_ids: Vec<u32>,
        /// Ordered sub-steps; always non-empty after normalization
        steps: Vec<StepDetail>,
    },

    /// An uploaded image; `None` when the reference failed validation.
    Image {
        /// Validated attachment reference
        image: Option<ImageRef>,
    },
}

impl Item {
    /// Get the kind tag of this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Header { .. } => ItemKind::Header,
            Item::Text { .. } => ItemKind::Text,
            Item::Step { .. } => ItemKind::Step,
            Item::Image { .. } => ItemKind::Image,
        }
    }

    /// Create an empty text item.
    pub fn empty_text() -> Self {
        Item::Text {
            text: String::new(),
            paint_ids: Vec::new(),
        }
    }

    /// Plain-text projection of this item, for search and previews.
    pub fn plain_text(&self) -> String {
        match self {
            Item::Header { text } | Item::Text { text, .. } => text.clone(),
            Item::Step { text, steps, .. } => {
                let mut parts = Vec::with_capacity(steps.len() + 1);
                if !text.trim().is_empty() {
                    parts.push(text.clone());
                }
                for step in steps {
                    parts.push(format!("{}: {}", step.title, step.text));
                }
                parts.join("\n")
            }
            Item::Image { image } => image
                .as_ref()
                .map(|img| img.caption.clone())
                .unwrap_or_default(),
        }
    }
}

/// The kind tag of an item, matching the wire `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Heading block
    Header,
    /// Prose block (also the compatibility fallback for unknown tags)
    #[default]
    Text,
    /// Sub-stepped how-to block
    Step,
    /// Image block
    Image,
}

impl ItemKind {
    /// Wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Header => "header",
            ItemKind::Text => "text",
            ItemKind::Step => "step",
            ItemKind::Image => "image",
        }
    }

    /// Parse a wire tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "header" => Some(ItemKind::Header),
            "text" => Some(ItemKind::Text),
            "step" => Some(ItemKind::Step),
            "image" => Some(ItemKind::Image),
            _ => None,
        }
    }
}

/// One sub-step within a step item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDetail {
    /// Step title, defaults to `"Step {n}"` when blank in the input
    pub title: String,

    /// Step instructions, may embed `{{paint:N}}` tokens
    pub text: String,

    /// Referenced paint IDs for this step's text
    #[serde(rename = "paintIds")]
    pub paint_ids: Vec<u32>,
}

impl StepDetail {
    /// Create a step detail.
    pub fn new(title: impl Into<String>, text: impl Into<String>, paint_ids: Vec<u32>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            paint_ids,
        }
    }

    /// Default title for the 1-indexed step number.
    pub fn default_title(number: usize) -> String {
        format!("Step {}", number)
    }
}

/// A validated reference to an uploaded attachment.
///
/// Invariant: `attachment_id` is always positive. References with a
/// non-positive or non-numeric ID never construct an `ImageRef`; they
/// normalize to `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Attachment ID returned by the upload endpoint
    #[serde(rename = "attachmentId")]
    pub attachment_id: u64,

    /// Alternative text for accessibility, may be empty
    pub alt: String,

    /// Display caption, may be empty
    pub caption: String,
}

impl ImageRef {
    /// Create an image reference. Returns `None` when the ID is zero.
    pub fn new(attachment_id: u64, alt: impl Into<String>, caption: impl Into<String>) -> Option<Self> {
        if attachment_id == 0 {
            return None;
        }
        Some(Self {
            attachment_id,
            alt: alt.into(),
            caption: caption.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_tags() {
        assert_eq!(ItemKind::Step.as_str(), "step");
        assert_eq!(ItemKind::from_tag("image"), Some(ItemKind::Image));
        assert_eq!(ItemKind::from_tag("video"), None);
    }

    #[test]
    fn test_image_ref_rejects_zero_id() {
        assert!(ImageRef::new(0, "", "").is_none());
        let img = ImageRef::new(5, "brush", "The brush").unwrap();
        assert_eq!(img.attachment_id, 5);
    }

    #[test]
    fn test_step_plain_text() {
        let item = Item::Step {
            text: "Base layers".to_string(),
            paint_ids: vec![],
            steps: vec![StepDetail::new("Step 1", "Prime the model", vec![])],
        };
        assert_eq!(item.plain_text(), "Base layers\nStep 1: Prime the model");
    }

    #[test]
    fn test_default_step_title() {
        assert_eq!(StepDetail::default_title(3), "Step 3");
    }
}
