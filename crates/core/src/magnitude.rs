//! Network and station magnitudes

use crate::metadata::{Comment, CreationInfo};
use crate::resource_id::ResourceId;
use serde::{Deserialize, Serialize};

/// Network magnitude of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magnitude {
    /// Identity token
    pub resource_id: ResourceId,

    /// Magnitude value
    pub mag: f64,

    /// Uncertainty of the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag_uncertainty: Option<f64>,

    /// Magnitude type, e.g. `mb` or `Mw`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude_type: Option<String>,

    /// Origin the magnitude was computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<ResourceId>,

    /// Number of stations used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_count: Option<u32>,

    /// Station magnitudes contributing to this magnitude
    #[serde(default)]
    pub station_magnitude_contributions: Vec<ResourceId>,

    /// Attached comments
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl Magnitude {
    /// Create a magnitude carrying only a value
    pub fn new(resource_id: impl Into<ResourceId>, mag: f64) -> Self {
        Self {
            resource_id: resource_id.into(),
            mag,
            mag_uncertainty: None,
            magnitude_type: None,
            origin_id: None,
            station_count: None,
            station_magnitude_contributions: Vec::new(),
            comments: Vec::new(),
            creation_info: None,
        }
    }
}

/// Magnitude measured at a single station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMagnitude {
    /// Identity token
    pub resource_id: ResourceId,

    /// Magnitude value
    pub mag: f64,

    /// Uncertainty of the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag_uncertainty: Option<f64>,

    /// Magnitude type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_magnitude_type: Option<String>,

    /// Origin the magnitude was computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<ResourceId>,

    /// Station code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_code: Option<String>,

    /// Attached comments
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Provenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
}

impl StationMagnitude {
    /// Create a station magnitude carrying only a value
    pub fn new(resource_id: impl Into<ResourceId>, mag: f64) -> Self {
        Self {
            resource_id: resource_id.into(),
            mag,
            mag_uncertainty: None,
            station_magnitude_type: None,
            origin_id: None,
            station_code: None,
            comments: Vec::new(),
            creation_info: None,
        }
    }
}
