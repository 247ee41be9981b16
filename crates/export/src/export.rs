//! Catalog traversal and the export entry points
//!
//! The traversal is a single depth-first walk in catalog order:
//!
//! ```text
//! event   -> remark*, event
//!   origin  -> remark*, origin, origerr
//!     arrival -> remark*, arrival, assoc, stassoc
//! ```
//!
//! At each node the identifier is allocated first, then the node's comments
//! are fanned out (so the remark group can be encoded in the node's row),
//! then the node's rows are appended. Every row is built in memory before
//! any file is opened.

use crate::database::CssDatabase;
use crate::error::{CssError, CssResult};
use crate::ids::{IdAllocator, IdKind};
use crate::node::{author_of, event_name, CatalogNode};
use crate::options::{format_lddate, ExportOptions};
use crate::remark::{extract_remarks, RemarkCounter, NO_REMARK};
use crate::rows::{ArrivalRow, AssocRow, EventRow, OrigerrRow, OriginRow, StassocRow};
use crate::schema::Relation;
use crate::writer::{ExportInfo, RelationWriter};
use chrono::{DateTime, Utc};
use seiscss_core::{Arrival, Catalog, Event, Origin};
use std::path::Path;
use tracing::{debug, info};

/// Mutable state of one export run
///
/// Identifier tables, the remark counter and the growing database live
/// here rather than in globals, so independent exports never interfere.
#[derive(Debug)]
pub struct ExportContext {
    ids: IdAllocator,
    remarks: RemarkCounter,
    db: CssDatabase,
}

impl ExportContext {
    /// Fresh context stamping rows with `lddate`
    pub fn new(lddate: impl Into<String>) -> Self {
        Self {
            ids: IdAllocator::new(),
            remarks: RemarkCounter::new(),
            db: CssDatabase::new(lddate),
        }
    }

    /// Identifier tables allocated so far
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Walk every event of `catalog`
    pub fn visit_catalog(&mut self, catalog: &Catalog) -> CssResult<()> {
        for event in catalog {
            self.visit_event(event)?;
        }
        Ok(())
    }

    /// Consume the context, yielding the rows built so far
    pub fn finish(self) -> CssDatabase {
        self.db
    }

    fn visit_event(&mut self, event: &Event) -> CssResult<()> {
        let evid = self.allocate(IdKind::Event, event);
        let commid = self.fan_out(event);

        let preferred = event
            .preferred_origin()
            .ok_or_else(|| CssError::UnresolvablePreferredOrigin {
                event: event.resource_id.clone(),
            })?;
        let prefor = self.allocate(IdKind::Origin, preferred);

        debug!(
            target: "seiscss::export",
            event = %event.resource_id,
            evid,
            prefor,
            "Exporting event"
        );

        let row = EventRow {
            evid,
            evname: event_name(event).to_string(),
            prefor,
            auth: author_of(event).to_string(),
            commid,
        };
        self.push(Relation::Event, row.encode(self.db.lddate()));

        for origin in &event.origins {
            self.visit_origin(origin, evid);
        }

        #[cfg(feature = "magnitudes")]
        self.visit_magnitudes(event, evid);

        Ok(())
    }

    fn visit_origin(&mut self, origin: &Origin, evid: i64) {
        let orid = self.allocate(IdKind::Origin, origin);
        let commid = self.fan_out(origin);

        let row = OriginRow {
            lat: origin.latitude,
            lon: origin.longitude,
            depth_km: origin.depth / 1000.0,
            time: epoch_seconds(&origin.time),
            orid,
            evid,
            auth: author_of(origin).to_string(),
            commid,
        };
        self.push(Relation::Origin, row.encode(self.db.lddate()));

        let origerr = OrigerrRow {
            orid,
            commid: NO_REMARK,
        };
        self.push(Relation::Origerr, origerr.encode(self.db.lddate()));

        for arrival in &origin.arrivals {
            self.visit_arrival(arrival, orid);
        }
    }

    fn visit_arrival(&mut self, arrival: &Arrival, orid: i64) {
        let arid = self.allocate(IdKind::Arrival, arrival);
        let commid = self.fan_out(arrival);

        let row = ArrivalRow {
            arid,
            azimuth: arrival.azimuth,
            auth: author_of(arrival).to_string(),
            commid,
        };
        self.push(Relation::Arrival, row.encode(self.db.lddate()));

        let assoc = AssocRow {
            arid,
            orid,
            commid: NO_REMARK,
        };
        self.push(Relation::Assoc, assoc.encode(self.db.lddate()));

        let stassoc = StassocRow {
            azimuth: arrival.azimuth,
            commid: NO_REMARK,
        };
        self.push(Relation::Stassoc, stassoc.encode(self.db.lddate()));
    }

    #[cfg(feature = "magnitudes")]
    fn visit_magnitudes(&mut self, event: &Event, evid: i64) {
        use crate::rows::{NetmagRow, StamagRow};

        for magnitude in &event.magnitudes {
            let magid = self.allocate(IdKind::Magnitude, magnitude);
            let commid = self.fan_out(magnitude);
            let orid = self.origin_ref(magnitude.origin_id.as_ref());

            let row = NetmagRow {
                magid,
                orid,
                evid,
                magtype: magnitude.magnitude_type.clone(),
                nsta: magnitude.station_count.map(i64::from),
                magnitude: magnitude.mag,
                uncertainty: magnitude.mag_uncertainty,
                auth: author_of(magnitude).to_string(),
                commid,
            };
            self.push(Relation::Netmag, row.encode(self.db.lddate()));
        }

        for station in &event.station_magnitudes {
            let magid = event
                .magnitudes
                .iter()
                .find(|m| m.station_magnitude_contributions.contains(&station.resource_id))
                .map(|m| self.allocate(IdKind::Magnitude, m))
                .unwrap_or(-1);
            let commid = self.fan_out(station);
            let orid = self.origin_ref(station.origin_id.as_ref());

            let row = StamagRow {
                magid,
                sta: station.station_code.clone(),
                orid,
                evid,
                magtype: station.station_magnitude_type.clone(),
                magnitude: station.mag,
                uncertainty: station.mag_uncertainty,
                auth: author_of(station).to_string(),
                commid,
            };
            self.push(Relation::Stamag, row.encode(self.db.lddate()));
        }
    }

    #[cfg(feature = "magnitudes")]
    fn origin_ref(&mut self, id: Option<&seiscss_core::ResourceId>) -> i64 {
        id.map(|id| self.ids.allocate(IdKind::Origin, id))
            .unwrap_or(-1)
    }

    /// Integer identifier of `node` within `kind`
    fn allocate<N: CatalogNode + ?Sized>(&mut self, kind: IdKind, node: &N) -> i64 {
        self.ids.allocate(kind, node.resource_id())
    }

    /// Fan out the node's comments and return its remark group
    fn fan_out<N: CatalogNode + ?Sized>(&mut self, node: &N) -> i64 {
        let (commid, rows) = extract_remarks(node, &mut self.remarks);
        for row in rows {
            let line = row.encode(self.db.lddate());
            self.db.push(Relation::Remark, line);
        }
        commid
    }

    fn push(&mut self, relation: Relation, row: String) {
        self.db.push(relation, row);
    }
}

/// Seconds since the Unix epoch, with sub-second precision
fn epoch_seconds(time: &DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9
}

/// Build every relation of `catalog` in memory
pub fn build_database(catalog: &Catalog, options: &ExportOptions) -> CssResult<CssDatabase> {
    let catalog_time = catalog
        .creation_info
        .as_ref()
        .and_then(|info| info.creation_time);
    let lddate = format_lddate(&options.resolve_load_time(catalog_time));

    let mut ctx = ExportContext::new(lddate);
    ctx.visit_catalog(catalog)?;
    Ok(ctx.finish())
}

/// Export `catalog` as a CSS3.0 database next to `basename`
///
/// Writes `<basename>.<relation>` for every relation that receives rows.
pub fn export_catalog(catalog: &Catalog, basename: impl AsRef<Path>) -> CssResult<ExportInfo> {
    export_catalog_with(catalog, basename, &ExportOptions::default())
}

/// Export `catalog` with explicit options
pub fn export_catalog_with(
    catalog: &Catalog,
    basename: impl AsRef<Path>,
    options: &ExportOptions,
) -> CssResult<ExportInfo> {
    let basename = basename.as_ref();
    let writer = RelationWriter::new(options);
    writer.validate_destination(basename)?;

    info!(
        target: "seiscss::export",
        basename = %basename.display(),
        events = catalog.len(),
        "CSS export started"
    );

    let db = build_database(catalog, options)?;
    let export = writer.write(&db, basename)?;

    info!(
        target: "seiscss::export",
        files = export.files.len(),
        rows = export.total_rows(),
        lddate = %export.lddate,
        "CSS export completed"
    );
    Ok(export)
}
