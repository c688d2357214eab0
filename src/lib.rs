//! # paintdoc
//!
//! Document model for paint-catalog articles and tutorials.
//!
//! A document is an ordered list of titled sections, each holding typed
//! content blocks (headers, prose, sub-stepped instructions, images).
//! Authors save it as JSON; this library parses that loose JSON into a
//! canonical in-memory tree and serializes the tree back into the strict
//! wire contract the catalog API accepts.
//!
//! ## Quick Start
//!
//! ```
//! use paintdoc::{parse_str, to_json, JsonFormat, NormalizeOptions};
//!
//! fn main() -> paintdoc::Result<()> {
//!     let options = NormalizeOptions::default();
//!
//!     // Any input, even garbage, yields a valid document
//!     let doc = parse_str(r#"{"sections":[{"title":"Intro"}]}"#, &options);
//!
//!     // Canonical wire JSON for submission
//!     let json = to_json(&doc, &options, JsonFormat::Compact)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: malformed input degrades to a default skeleton
//! - **Fallback field tables**: duck-typed inputs resolve through named,
//!   testable lookup orders
//! - **Canonical output**: empty blocks pruned, blank fields omitted,
//!   step paint IDs re-derived from text
//! - **Paint references**: `{{paint:N}}` tokens extracted from prose and
//!   resolvable through an explicit display-data cache

pub mod error;
pub mod extract;
pub mod model;
pub mod paint;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract_paint_ids, has_paint_token};
pub use model::{
    Document, DocumentStats, ImageRef, Item, ItemKind, Section, StepDetail, DOCUMENT_VERSION,
};
pub use paint::{PaintCache, PaintLookup, PaintSummary};
pub use parse::{normalize_item, normalize_section, NormalizeOptions, UnknownKind};
pub use render::{to_wire_value, JsonFormat};

use serde_json::Value;

/// Parse a document from a JSON string with the given options.
///
/// Total: never fails, see [`parse::parse_str`].
pub fn parse_str(input: &str, options: &NormalizeOptions) -> Document {
    parse::parse_str(input, options)
}

/// Parse a document from a decoded JSON value with the given options.
pub fn parse_value(value: &Value, options: &NormalizeOptions) -> Document {
    parse::parse_value(value, options)
}

/// Serialize a document to a wire JSON string.
pub fn to_json(doc: &Document, options: &NormalizeOptions, format: JsonFormat) -> Result<String> {
    render::to_json(doc, options, format)
}

/// Builder for parsing and canonicalizing documents.
///
/// # Example
///
/// ```
/// use paintdoc::{JsonFormat, Paintdoc};
///
/// let json = Paintdoc::new()
///     .drop_unknown()
///     .parse(r#"{"sections":[{"title":"Intro"}]}"#)
///     .to_json(JsonFormat::Pretty)?;
/// # Ok::<(), paintdoc::Error>(())
/// ```
pub struct Paintdoc {
    options: NormalizeOptions,
}

impl Paintdoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: NormalizeOptions::default(),
        }
    }

    /// Set the kind assigned to untagged, non-image-like items.
    pub fn with_fallback_kind(mut self, kind: ItemKind) -> Self {
        self.options = self.options.with_fallback_kind(kind);
        self
    }

    /// Drop items with unrecognized `type` tags instead of coercing them.
    pub fn drop_unknown(mut self) -> Self {
        self.options = self.options.drop_unknown();
        self
    }

    /// Trust stored step paint IDs on save instead of re-deriving them.
    pub fn trust_step_ids(mut self) -> Self {
        self.options = self.options.trust_step_ids();
        self
    }

    /// Parse a JSON string into a result wrapper.
    pub fn parse(self, input: &str) -> PaintdocResult {
        let document = parse::parse_str(input, &self.options);
        PaintdocResult {
            document,
            options: self.options,
        }
    }

    /// Parse a decoded JSON value into a result wrapper.
    pub fn parse_value(self, value: &Value) -> PaintdocResult {
        let document = parse::parse_value(value, &self.options);
        PaintdocResult {
            document,
            options: self.options,
        }
    }
}

impl Default for Paintdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document.
pub struct PaintdocResult {
    /// The parsed document
    pub document: Document,
    options: NormalizeOptions,
}

impl PaintdocResult {
    /// Serialize to a wire JSON string.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, &self.options, format)
    }

    /// Serialize to a wire JSON value.
    pub fn to_wire_value(&self) -> Value {
        render::to_wire_value(&self.document, &self.options)
    }

    /// Get plain text without markup.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Compute content statistics.
    pub fn stats(&self) -> DocumentStats {
        self.document.stats()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paintdoc_builder() {
        let builder = Paintdoc::new().drop_unknown().trust_step_ids();
        assert_eq!(builder.options.unknown_kinds, UnknownKind::Drop);
        assert!(!builder.options.canonicalize_step_ids);
    }

    #[test]
    fn test_builder_default_options() {
        let builder = Paintdoc::default();
        assert_eq!(builder.options.fallback_kind, ItemKind::Text);
        assert_eq!(builder.options.unknown_kinds, UnknownKind::Coerce);
    }

    #[test]
    fn test_parse_garbage_yields_skeleton() {
        let result = Paintdoc::new().parse("not json at all");
        assert_eq!(result.document().section_count(), 1);
    }

    #[test]
    fn test_result_stats() {
        let result = Paintdoc::new().parse(
            r#"{"sections":[{"title":"Intro","items":[{"type":"text","text":"Use {{paint:9}}"}]}]}"#,
        );
        let stats = result.stats();
        assert_eq!(stats.text_items, 1);
        assert_eq!(stats.paint_refs, 1);
    }

    #[test]
    fn test_result_plain_text() {
        let result = Paintdoc::new()
            .parse(r#"{"sections":[{"title":"Intro","items":[{"text":"Hello"}]}]}"#);
        assert_eq!(result.plain_text(), "Intro\nHello");
    }
}
