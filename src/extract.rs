//! Paint reference token extraction.
//!
//! Prose in text and step items may embed inline references to catalog
//! paints as `{{paint:N}}` tokens, where `N` is a positive integer ID.
//! Extraction collects the distinct IDs in first-occurrence order so the
//! editor layer can prefetch display data in a single lookup.

use regex::Regex;
use std::sync::OnceLock;

fn paint_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{paint:(\d+)\}\}").unwrap())
}

/// Extract the distinct paint IDs referenced in free text.
///
/// Returns IDs in first-occurrence order, deduplicated. Malformed tokens
/// (non-numeric, zero, or out-of-range IDs) are ignored. Total: empty
/// input yields an empty list.
///
/// # Example
///
/// ```
/// use paintdoc::extract_paint_ids;
///
/// let ids = extract_paint_ids("prime {{paint:7}} then {{paint:42}} then {{paint:7}}");
/// assert_eq!(ids, vec![7, 42]);
/// ```
pub fn extract_paint_ids(text: &str) -> Vec<u32> {
    let mut ids = Vec::new();
    for caps in paint_token_regex().captures_iter(text) {
        if let Ok(id) = caps[1].parse::<u32>() {
            if id > 0 && !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Check whether free text contains at least one well-formed paint token.
pub fn has_paint_token(text: &str) -> bool {
    !extract_paint_ids(text).is_empty()
}
