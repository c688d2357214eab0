//! Paint display data lookup.
//!
//! Paint IDs in a document are foreign references into the external
//! catalog; this module holds the display data an editor fetches for
//! them. The cache is an explicit value owned by the caller and passed
//! to rendering code, never a process-wide singleton.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display summary for one catalog paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintSummary {
    /// Catalog ID
    pub id: u32,

    /// Display name
    pub name: String,

    /// Swatch color as a hex string (e.g., "#C0392B"), if known
    pub hex_color: Option<String>,
}

impl PaintSummary {
    /// Create a summary without a swatch color.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hex_color: None,
        }
    }

    /// Set the swatch color.
    pub fn with_hex_color(mut self, color: impl Into<String>) -> Self {
        self.hex_color = Some(color.into());
        self
    }
}

/// Lookup seam for paint display data.
///
/// The catalog API client implements this over its fetch results; tests
/// and offline rendering use [`PaintCache`] directly.
pub trait PaintLookup {
    /// Get the summary for a paint ID, if known.
    fn get(&self, id: u32) -> Option<&PaintSummary>;

    /// The subset of `ids` this lookup has no data for, in input order.
    fn missing(&self, ids: &[u32]) -> Vec<u32> {
        ids.iter().copied().filter(|&id| self.get(id).is_none()).collect()
    }
}

/// In-memory paint summary cache.
#[derive(Debug, Clone, Default)]
pub struct PaintCache {
    entries: HashMap<u32, PaintSummary>,
}

impl PaintCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a summary.
    pub fn insert(&mut self, summary: PaintSummary) {
        self.entries.insert(summary.id, summary);
    }

    /// Insert a batch of summaries (e.g., one search response).
    pub fn extend(&mut self, summaries: impl IntoIterator<Item = PaintSummary>) {
        for summary in summaries {
            self.insert(summary);
        }
    }

    /// Check if a paint ID is cached.
    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cached summaries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PaintLookup for PaintCache {
    fn get(&self, id: u32) -> Option<&PaintSummary> {
        self.entries.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_roundtrip() {
        let mut cache = PaintCache::new();
        cache.insert(PaintSummary::new(7, "Mephiston Red").with_hex_color("#991115"));

        assert!(cache.contains(7));
        assert_eq!(cache.get(7).unwrap().name, "Mephiston Red");
        assert_eq!(cache.get(8), None);
    }

    #[test]
    fn test_missing_preserves_order() {
        let mut cache = PaintCache::new();
        cache.extend([PaintSummary::new(2, "Abaddon Black")]);

        assert_eq!(cache.missing(&[9, 2, 4]), vec![9, 4]);
    }
}
