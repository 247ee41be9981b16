//! Resource identifiers
//!
//! Every catalog node (event, origin, arrival, magnitude, ...) carries a
//! resource identifier. The identifier is the node's identity token: two
//! references with equal identifiers denote the same node, no matter where
//! in the catalog they appear.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix used for identifiers generated locally.
pub const LOCAL_PREFIX: &str = "smi:local/";

/// Stable identity token for a catalog node
///
/// Identifiers are opaque strings compared byte-for-byte. Freshly generated
/// identifiers have the form `smi:local/<uuid v4>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Generate a new, unique local identifier
    pub fn new() -> Self {
        Self(format!("{}{}", LOCAL_PREFIX, Uuid::new_v4()))
    }

    /// Wrap an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier was generated locally
    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_PREFIX)
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::from_string(id)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
