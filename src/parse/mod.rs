//! Normalization of loose input JSON into the canonical model.
//!
//! Input documents are author-controlled and duck-typed; this module
//! coerces them into the [`crate::model`] types using named fallback
//! tables and never fails.

pub mod fields;

mod document;
mod item;
mod options;
mod section;

pub use document::{parse_str, parse_value};
pub use item::normalize_item;
pub use options::{NormalizeOptions, UnknownKind};
pub use section::normalize_section;
