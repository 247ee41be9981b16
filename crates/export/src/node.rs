//! Uniform view over catalog nodes
//!
//! Events, origins, arrivals and magnitudes all carry an identity token,
//! comments and optional creation info. The exporter only needs those three
//! things to allocate identifiers, fan out remarks and resolve authors.

use crate::format::TEXT_DEFAULT;
use seiscss_core::{
    Arrival, Comment, CreationInfo, Event, EventDescriptionType, Magnitude, Origin, ResourceId,
    StationMagnitude,
};

/// A catalog node that can own comments
pub trait CatalogNode {
    /// Identity token
    fn resource_id(&self) -> &ResourceId;

    /// Attached comments, in order
    fn comments(&self) -> &[Comment];

    /// Provenance, if recorded
    fn creation_info(&self) -> Option<&CreationInfo>;
}

macro_rules! impl_catalog_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CatalogNode for $ty {
                fn resource_id(&self) -> &ResourceId {
                    &self.resource_id
                }

                fn comments(&self) -> &[Comment] {
                    &self.comments
                }

                fn creation_info(&self) -> Option<&CreationInfo> {
                    self.creation_info.as_ref()
                }
            }
        )*
    };
}

impl_catalog_node!(Event, Origin, Arrival, Magnitude, StationMagnitude);

/// `auth` column value for a node
///
/// The creation author when non-empty, otherwise the agency when non-empty,
/// otherwise `-`.
pub fn author_of<N: CatalogNode + ?Sized>(node: &N) -> &str {
    node.creation_info()
        .and_then(|info| {
            non_empty(info.author.as_deref()).or_else(|| non_empty(info.agency_id.as_deref()))
        })
        .unwrap_or(TEXT_DEFAULT)
}

/// `evname` column value for an event
///
/// Text of the first non-empty description tagged as the earthquake name,
/// otherwise `-`.
pub fn event_name(event: &Event) -> &str {
    event
        .event_descriptions
        .iter()
        .filter(|d| d.kind == Some(EventDescriptionType::EarthquakeName))
        .find_map(|d| non_empty(Some(d.text.as_str())))
        .unwrap_or(TEXT_DEFAULT)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
