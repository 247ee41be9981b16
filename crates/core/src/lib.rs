//! Catalog model for the CSS3.0 exporter
//!
//! This crate defines the read-only object graph the exporter walks:
//! - Catalog: ordered events plus catalog-level provenance
//! - Event: origins, preferred-origin reference, descriptions, magnitudes
//! - Origin / Arrival: hypocentre estimates and their phase associations
//! - Magnitude / StationMagnitude: network and per-station magnitudes
//! - Comment / CreationInfo / EventDescription: metadata shared by all nodes
//! - ResourceId: identity token of every node

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod event;
pub mod magnitude;
pub mod metadata;
pub mod origin;
pub mod resource_id;

pub use catalog::Catalog;
pub use error::{ModelError, ModelResult};
pub use event::Event;
pub use magnitude::{Magnitude, StationMagnitude};
pub use metadata::{Comment, CreationInfo, EventDescription, EventDescriptionType};
pub use origin::{Arrival, Origin};
pub use resource_id::ResourceId;
