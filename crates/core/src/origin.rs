//! Origins and phase arrivals

use crate::metadata::{Comment, CreationInfo};
use crate::resource_id::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hypocentre estimate of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Identity token
    pub resource_id: ResourceId,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Depth in meters below the surface
    pub depth: f64,

    /// Origin time
    pub time: DateTime<Utc>,

    /// Phase arrivals associated with this origin, in pick order
    #[serde(default)]
    pub arrivals: Vec<Arrival>,

    /// Attached comments
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Origin {
    /// Create an origin with no arrivals, comments or creation info
    pub fn new(
        resource_id: impl Into<ResourceId>,
        latitude: f64,
        longitude: f64,
        depth: f64,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            latitude,
            longitude,
            depth,
            time,
            arrivals: Vec::new(),
            comments: Vec::new(),
            creation_info: None,
        }
    }

    /// Append an arrival
    pub fn with_arrival(mut self, arrival: Arrival) -> Self {
        self.arrivals.push(arrival);
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

/// Association of a phase pick with an origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    /// Identity token
    pub resource_id: ResourceId,

    /// Azimuth from the origin to the station, in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,

    /// Attached comments
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Arrival {
    /// Create an arrival with no azimuth, comments or creation info
    pub fn new(resource_id: impl Into<ResourceId>) -> Self {
        Self {
            resource_id: resource_id.into(),
            azimuth: None,
            comments: Vec::new(),
            creation_info: None,
        }
    }

    /// Set the azimuth
    pub fn with_azimuth(mut self, azimuth: f64) -> Self {
        self.azimuth = Some(azimuth);
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
