//! Seismic events

use crate::magnitude::{Magnitude, StationMagnitude};
use crate::metadata::{Comment, CreationInfo, EventDescription};
use crate::origin::Origin;
use crate::resource_id::ResourceId;
use serde::{Deserialize, Serialize};

/// A seismic event and everything known about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identity token
    pub resource_id: ResourceId,

    /// Candidate origins, in catalog order
    #[serde(default)]
    pub origins: Vec<Origin>,

    /// Reference to the preferred entry of `origins`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_origin_id: Option<ResourceId>,

    /// Network magnitudes
    #[serde(default)]
    pub magnitudes: Vec<Magnitude>,

    /// Station magnitudes
    #[serde(default)]
    pub station_magnitudes: Vec<StationMagnitude>,

    /// Textual descriptions
    #[serde(default)]
    pub event_descriptions: Vec<EventDescription>,

    /// Attached comments
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Event {
    /// Create an empty event
    pub fn new(resource_id: impl Into<ResourceId>) -> Self {
        Self {
            resource_id: resource_id.into(),
            origins: Vec::new(),
            preferred_origin_id: None,
            magnitudes: Vec::new(),
            station_magnitudes: Vec::new(),
            event_descriptions: Vec::new(),
            comments: Vec::new(),
            creation_info: None,
        }
    }

    /// Resolve the preferred origin among this event's origins
    ///
    /// Returns `None` when no preference is set or when the reference does
    /// not match any origin of the event.
    pub fn preferred_origin(&self) -> Option<&Origin> {
        let wanted = self.preferred_origin_id.as_ref()?;
        self.origins.iter().find(|o| &o.resource_id == wanted)
    }

    /// Append an origin
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origins.push(origin);
        self
    }

    /// Set the preferred origin reference
    pub fn with_preferred_origin(mut self, id: impl Into<ResourceId>) -> Self {
        self.preferred_origin_id = Some(id.into());
        self
    }

    /// Append a magnitude
    pub fn with_magnitude(mut self, magnitude: Magnitude) -> Self {
        self.magnitudes.push(magnitude);
        self
    }

    /// Append a station magnitude
    pub fn with_station_magnitude(mut self, magnitude: StationMagnitude) -> Self {
        self.station_magnitudes.push(magnitude);
        self
    }

    /// Append a description
    pub fn with_description(mut self, description: EventDescription) -> Self {
        self.event_descriptions.push(description);
        self
    }

    /// Append a comment
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Set the creation info
    pub fn with_creation_info(mut self, info: CreationInfo) -> Self {
        self.creation_info = Some(info);
        self
    }
}
