//! seiscss - CSS3.0 flat-file export for seismic event catalogs
//!
//! A catalog (events, origins, arrivals, comments) is written as a family
//! of fixed-width relation files sharing one basename: `quakes.event`,
//! `quakes.origin`, `quakes.arrival`, `quakes.remark`, ...
//!
//! # Quick Start
//!
//! ```ignore
//! use seiscss::{export_catalog, Catalog};
//!
//! let catalog = Catalog::load_json("catalog.json")?;
//! let info = export_catalog(&catalog, "out/quakes")?;
//! assert!(info.file(seiscss::Relation::Event).is_some());
//! ```
//!
//! # Architecture
//!
//! The catalog model lives in `seiscss-core`; the relational export engine
//! (identifier allocation, remark fan-out, row encoding, file emission)
//! lives in `seiscss-export`. Both are re-exported here.

pub use seiscss_core::{
    Arrival, Catalog, Comment, CreationInfo, Event, EventDescription, EventDescriptionType,
    Magnitude, ModelError, ModelResult, Origin, ResourceId, StationMagnitude,
};
pub use seiscss_export::{
    build_database, export_catalog, export_catalog_with, relation_path, CssDatabase, CssError,
    CssResult, ExportInfo, ExportOptions, Relation, WrittenRelation,
};

/// Lower-level pieces of the export engine
pub mod engine {
    pub use seiscss_export::{
        author_of, event_name, extract_remarks, format, ids, rows, schema, CatalogNode, Column,
        ColumnKind, ExportContext, FieldValue, IdAllocator, IdKind, RelationWriter,
        RemarkCounter, Schema, LDDATE_FORMAT, LDDATE_WIDTH, NO_REMARK,
    };
}
