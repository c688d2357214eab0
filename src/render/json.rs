//! JSON string output for wire documents.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parse::NormalizeOptions;

use super::wire::to_wire_value;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document to a wire JSON string.
pub fn to_json(doc: &Document, options: &NormalizeOptions, format: JsonFormat) -> Result<String> {
    let value = to_wire_value(doc, options);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&value),
        JsonFormat::Compact => serde_json::to_string(&value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
