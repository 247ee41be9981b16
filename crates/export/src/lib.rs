//! CSS3.0 relational export for seismic catalogs
//!
//! This crate turns a [`Catalog`](seiscss_core::Catalog) into a CSS3.0
//! flat-file database: one fixed-width text file per relation, rows
//! cross-referenced through synthetic integer identifiers.
//!
//! - ids: per-kind dense identifier allocation (`evid`, `orid`, `arid`, ...)
//! - remark: comment fan-out into the `remark` relation
//! - schema / format: column schemas and fixed-width cell rendering
//! - rows: one row encoder per relation
//! - export: catalog traversal and the public entry points
//! - writer: `<basename>.<relation>` file emission
//! - options: export configuration (TOML)
//!
//! ## Usage
//!
//! ```ignore
//! let info = seiscss_export::export_catalog(&catalog, "out/quakes")?;
//! for file in &info.files {
//!     println!("{} rows -> {}", file.rows, file.path.display());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod error;
pub mod export;
pub mod format;
pub mod ids;
pub mod node;
pub mod options;
pub mod remark;
pub mod rows;
pub mod schema;
pub mod writer;

pub use database::CssDatabase;
pub use error::{CssError, CssResult};
pub use export::{build_database, export_catalog, export_catalog_with, ExportContext};
pub use format::FieldValue;
pub use ids::{IdAllocator, IdKind};
pub use node::{author_of, event_name, CatalogNode};
pub use options::{format_lddate, ExportOptions, LDDATE_FORMAT};
pub use remark::{extract_remarks, RemarkCounter, NO_REMARK};
pub use schema::{Column, ColumnKind, Relation, Schema, LDDATE_WIDTH};
pub use writer::{relation_path, ExportInfo, RelationWriter, WrittenRelation};
