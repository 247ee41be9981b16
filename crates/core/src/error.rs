//! Error types for the catalog model
//!
//! The model itself is plain data; the only fallible operations are loading
//! and saving catalogs as JSON documents.

use std::io;
use thiserror::Error;

/// Result type alias for catalog model operations
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors raised while loading or saving a catalog
#[derive(Debug, Error)]
pub enum ModelError {
    /// I/O error while reading or writing a catalog document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed catalog document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
