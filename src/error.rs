//! Error types for the paintdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for paintdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing output.
///
/// Parsing and normalization are total and never fail; errors only
/// surface at the I/O and JSON-encoding boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding the wire document to a JSON string.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
