//! Section types.

use super::Item;
use serde::{Deserialize, Serialize};

/// A titled group of items within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,

    /// Ordered content blocks
    pub items: Vec<Item>,
}

impl Section {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Default title for a section at the given zero-based index.
    pub fn default_title(index: usize) -> String {
        format!("Section {}", index + 1)
    }

    /// Add an item to the section.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Check if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain-text projection of the section.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.items.len() + 1);
        if !self.title.trim().is_empty() {
            parts.push(self.title.clone());
        }
        for item in &self.items {
            let text = item.plain_text();
            if !text.trim().is_empty() {
                parts.push(text);
            }
        }
        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(Section::default_title(0), "Section 1");
        assert_eq!(Section::default_title(4), "Section 5");
    }

    #[test]
    fn test_plain_text_skips_blank_items() {
        let mut section = Section::new("Intro");
        section.add_item(Item::empty_text());
        section.add_item(Item::Header {
            text: "Supplies".to_string(),
        });
        assert_eq!(section.plain_text(), "Intro\nSupplies");
    }
}
