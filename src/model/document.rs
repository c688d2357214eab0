//! Document-level types.

use super::{Item, ItemKind, Section};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wire format version stamped on new and unversioned documents.
pub const DOCUMENT_VERSION: &str = "3.0.0";

/// A rich content document: an ordered sequence of titled sections.
///
/// Invariant: a document produced by parsing always has at least one
/// section. Absent or unparsable input yields the default skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Creation or last-save timestamp, unix milliseconds
    pub time: i64,

    /// Wire format version (e.g., "3.0.0")
    pub version: String,

    /// Ordered sections; never empty after parsing
    pub sections: Vec<Section>,
}

impl Document {
    /// Create an empty document stamped with the current time.
    pub fn new() -> Self {
        Self {
            time: now_millis(),
            version: DOCUMENT_VERSION.to_string(),
            sections: Vec::new(),
        }
    }

    /// The default one-section skeleton used when input is absent or
    /// unparsable.
    pub fn skeleton() -> Self {
        let mut doc = Self::new();
        doc.sections.push(Section::new(Section::default_title(0)));
        doc
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every paint ID referenced anywhere in the document, in
    /// first-occurrence order, deduplicated.
    ///
    /// Useful for prefetching display data from the catalog in a single
    /// lookup before rendering.
    pub fn paint_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        let mut push = |candidates: &[u32], ids: &mut Vec<u32>| {
            for &id in candidates {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        };
        for section in &self.sections {
            for item in &section.items {
                match item {
                    Item::Text { paint_ids, .. } => push(paint_ids, &mut ids),
                    Item::Step {
                        paint_ids, steps, ..
                    } => {
                        push(paint_ids, &mut ids);
                        for step in steps {
                            push(&step.paint_ids, &mut ids);
                        }
                    }
                    Item::Header { .. } | Item::Image { .. } => {}
                }
            }
        }
        ids
    }

    /// Plain-text projection of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Compute content statistics for the document.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats {
            sections: self.sections.len(),
            ..Default::default()
        };
        for section in &self.sections {
            for item in &section.items {
                match item.kind() {
                    ItemKind::Header => stats.headers += 1,
                    ItemKind::Text => stats.text_items += 1,
                    ItemKind::Step => stats.step_items += 1,
                    ItemKind::Image => stats.image_items += 1,
                }
                if let Item::Step { steps, .. } = item {
                    stats.steps += steps.len();
                }
            }
        }
        stats.paint_refs = self.paint_ids().len();
        stats
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::skeleton()
    }
}

/// Content statistics for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of sections
    pub sections: usize,

    /// Number of header items
    pub headers: usize,

    /// Number of text items
    pub text_items: usize,

    /// Number of step items
    pub step_items: usize,

    /// Number of image items
    pub image_items: usize,

    /// Total sub-steps across all step items
    pub steps: usize,

    /// Distinct paint IDs referenced anywhere in the document
    pub paint_refs: usize,
}

/// Current time as unix milliseconds.
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
