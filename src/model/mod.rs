//! Canonical document model.
//!
//! These types are the resolved in-memory representation that bridges the
//! loose author-controlled input JSON and the strict wire contract. The
//! model is built by [`crate::parse`] and emitted by [`crate::render`].

mod document;
mod item;
mod section;

pub use document::{Document, DocumentStats, DOCUMENT_VERSION};
pub use item::{ImageRef, Item, ItemKind, StepDetail};
pub use section::Section;

pub(crate) use document::now_millis;
