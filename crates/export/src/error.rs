//! CSS export error types

use seiscss_core::ResourceId;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a catalog
#[derive(Debug, Error)]
pub enum CssError {
    /// Destination does not name a writable basename
    #[error("Invalid destination '{}': {reason}", path.display())]
    InvalidDestination {
        /// Basename that was rejected
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// Event has no preferred origin, or the reference matches none of its origins
    #[error("Event {event} has no resolvable preferred origin")]
    UnresolvablePreferredOrigin {
        /// Identifier of the offending event
        event: ResourceId,
    },

    /// Storage rejected a relation file
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailure {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Export options could not be loaded or parsed
    #[error("Invalid export configuration: {0}")]
    InvalidConfig(String),
}

impl CssError {
    /// Create an invalid destination error
    pub fn invalid_destination(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidDestination {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a write failure error
    pub fn write_failure(path: &Path, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<toml::de::Error> for CssError {
    fn from(e: toml::de::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

/// Result type for CSS export operations
pub type CssResult<T> = Result<T, CssError>;
