//! Network and station magnitudes

use crate::common::*;

fn magnitude_catalog() -> Catalog {
    let mut ml = Magnitude::new("smi:test/magnitude/ml", 4.27);
    ml.magnitude_type = Some("ML".to_string());
    ml.mag_uncertainty = Some(0.15);
    ml.station_count = Some(12);
    ml.origin_id = Some("smi:test/origin/1".into());
    ml.station_magnitude_contributions = vec!["smi:test/stamag/anmo".into()];

    let mut anmo = StationMagnitude::new("smi:test/stamag/anmo", 4.1);
    anmo.station_code = Some("ANMO".to_string());
    anmo.station_magnitude_type = Some("ML".to_string());
    anmo.origin_id = Some("smi:test/origin/1".into());

    let orphan = StationMagnitude::new("smi:test/stamag/orphan", 3.9);

    let event = Event::new("smi:test/event/1")
        .with_origin(Origin::new("smi:test/origin/1", 0.0, 0.0, 0.0, origin_time()))
        .with_preferred_origin("smi:test/origin/1")
        .with_magnitude(ml)
        .with_station_magnitude(anmo)
        .with_station_magnitude(orphan);
    catalog().with_event(event)
}

#[cfg(not(feature = "magnitudes"))]
#[test]
fn magnitudes_skipped_by_default() {
    let out = ExportDir::new();
    let info = export_catalog(&magnitude_catalog(), &out.basename).unwrap();

    assert!(info.file(Relation::Netmag).is_none());
    assert!(info.file(Relation::Stamag).is_none());
    assert!(!out.path_of(Relation::Netmag).exists());
    assert!(!out.path_of(Relation::Stamag).exists());
}

#[cfg(feature = "magnitudes")]
mod enabled {
    use super::*;

    #[test]
    fn netmag_row_binds_magnitude() {
        let out = ExportDir::new();
        export_catalog(&magnitude_catalog(), &out.basename).unwrap();

        let schema = Relation::Netmag.schema();
        let rows = out.rows(Relation::Netmag);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), schema.row_width());
        assert_eq!(int_cell(schema, row, "magid"), 1);
        assert_eq!(int_cell(schema, row, "orid"), 1);
        assert_eq!(int_cell(schema, row, "evid"), 1);
        assert_eq!(cell(schema, row, "magtype"), "ML");
        assert_eq!(int_cell(schema, row, "nsta"), 12);
        assert_eq!(cell(schema, row, "magnitude"), "4.27");
        assert_eq!(cell(schema, row, "uncertainty"), "0.15");
        assert_eq!(cell(schema, row, "net"), "-");
    }

    #[test]
    fn stamag_rows_link_contributing_magnitude() {
        let out = ExportDir::new();
        export_catalog(&magnitude_catalog(), &out.basename).unwrap();

        let schema = Relation::Stamag.schema();
        let rows = out.rows(Relation::Stamag);
        assert_eq!(rows.len(), 2);

        assert_eq!(int_cell(schema, &rows[0], "magid"), 1);
        assert_eq!(cell(schema, &rows[0], "sta"), "ANMO");
        assert_eq!(int_cell(schema, &rows[0], "orid"), 1);
        assert_eq!(cell(schema, &rows[0], "magnitude"), "4.10");

        assert_eq!(int_cell(schema, &rows[1], "magid"), -1);
        assert_eq!(cell(schema, &rows[1], "sta"), "-");
        assert_eq!(int_cell(schema, &rows[1], "orid"), -1);
        assert_eq!(cell(schema, &rows[1], "uncertainty"), "-1.00");
    }

    #[test]
    fn magnitude_comments_join_remark_groups() {
        let mut cat = magnitude_catalog();
        cat.events[0].magnitudes[0]
            .comments
            .push(Comment::new("manual review"));

        let out = ExportDir::new();
        export_catalog(&cat, &out.basename).unwrap();

        let netmag = &out.rows(Relation::Netmag)[0];
        assert_eq!(int_cell(Relation::Netmag.schema(), netmag, "commid"), 1);
        let remark = &out.rows(Relation::Remark)[0];
        assert_eq!(cell(Relation::Remark.schema(), remark, "remark"), "manual review");
    }
}
