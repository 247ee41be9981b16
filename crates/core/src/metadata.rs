//! Metadata shared by every catalog node
//!
//! - CreationInfo: who created a node, and when
//! - Comment: free-text remark attached to a node
//! - EventDescription: typed textual description of an event

use crate::resource_id::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance of a catalog node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreationInfo {
    /// Name of the person or program that created the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Agency responsible for the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,

    /// When the node was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
}

impl CreationInfo {
    /// Creation info naming only an author
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }

    /// Creation info naming only an agency
    pub fn by_agency(agency_id: impl Into<String>) -> Self {
        Self {
            agency_id: Some(agency_id.into()),
            ..Self::default()
        }
    }

    /// Set the creation time
    pub fn created_at(mut self, time: DateTime<Utc>) -> Self {
        self.creation_time = Some(time);
        self
    }
}

/// Free-text comment attached to a catalog node
///
/// A node's comments are ordered; a comment's position in that sequence is
/// its ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment text, possibly spanning several lines
    pub text: String,

    /// Optional identifier of the comment itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,

    /// Optional provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Comment {
    /// Create a comment with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            resource_id: None,
            creation_info: None,
        }
    }
}

/// Category of an event description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventDescriptionType {
    /// Felt report
    #[serde(rename = "felt report")]
    FeltReport,
    /// Flinn-Engdahl region name
    #[serde(rename = "Flinn-Engdahl region")]
    FlinnEngdahlRegion,
    /// Local time of the event
    #[serde(rename = "local time")]
    LocalTime,
    /// Tectonic summary
    #[serde(rename = "tectonic summary")]
    TectonicSummary,
    /// Nearest cities
    #[serde(rename = "nearest cities")]
    NearestCities,
    /// Common name of the earthquake
    #[serde(rename = "earthquake name")]
    EarthquakeName,
    /// Region name
    #[serde(rename = "region name")]
    RegionName,
}

/// Textual description of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescription {
    /// Free text
    pub text: String,

    /// What the text describes, if known
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventDescriptionType>,
}

impl EventDescription {
    /// Create a typed description
    pub fn new(text: impl Into<String>, kind: EventDescriptionType) -> Self {
        Self {
            text: text.into(),
            kind: Some(kind),
        }
    }

    /// Create an untyped description
    pub fn untyped(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }
}
