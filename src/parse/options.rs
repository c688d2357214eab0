//! Normalization options and configuration.
//!
//! The article and tutorial editors share one normalizer core; their
//! behavioral differences are expressed here instead of in duplicated
//! code paths.

use crate::model::ItemKind;

/// Options for normalizing loose input into the canonical model.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Kind assigned to untagged, non-image-like items
    pub fallback_kind: ItemKind,

    /// How to treat items whose `type` tag is unrecognized
    pub unknown_kinds: UnknownKind,

    /// Re-derive step paint IDs from text on save instead of trusting
    /// stored IDs
    pub canonicalize_step_ids: bool,
}

impl NormalizeOptions {
    /// Create normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind assigned to untagged, non-image-like items.
    pub fn with_fallback_kind(mut self, kind: ItemKind) -> Self {
        self.fallback_kind = kind;
        self
    }

    /// Drop items with unrecognized `type` tags instead of coercing them.
    pub fn drop_unknown(mut self) -> Self {
        self.unknown_kinds = UnknownKind::Drop;
        self
    }

    /// Trust stored step paint IDs on save instead of re-deriving them.
    pub fn trust_step_ids(mut self) -> Self {
        self.canonicalize_step_ids = false;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            fallback_kind: ItemKind::Text,
            unknown_kinds: UnknownKind::Coerce,
            canonicalize_step_ids: true,
        }
    }
}

/// Policy for items with an unrecognized `type` tag.
///
/// Historical inputs carry tags this model never defined; coercing them
/// into the fallback kind is a compatibility shim, not a validated
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKind {
    /// Coerce to the fallback kind, keeping whatever text resolves
    #[default]
    Coerce,
    /// Drop the item entirely
    Drop,
}
