//! Event catalogs
//!
//! A catalog is the root of the object graph handed to the exporter. It can
//! be built in code or loaded from a JSON document mirroring the structs in
//! this crate.

use crate::error::ModelResult;
use crate::event::Event;
use crate::metadata::CreationInfo;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered collection of events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Events, in catalog order
    #[serde(default)]
    pub events: Vec<Event>,

    /// Provenance of the catalog as a whole
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Set the creation info
    pub fn with_creation_info(mut self, info: CreationInfo) -> Self {
        self.creation_info = Some(info);
        self
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Parse a catalog from a JSON document
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog as pretty-printed JSON
    pub fn to_json_string(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a catalog from a JSON file
    pub fn load_json(path: impl AsRef<Path>) -> ModelResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
