//! Fixed-width layout of every emitted row

use crate::common::*;
use proptest::prelude::*;
use seiscss::CssDatabase;

fn assert_layout(db: &CssDatabase) {
    for relation in Relation::ALL {
        let schema = relation.schema();
        for row in db.rows(relation) {
            assert_eq!(
                row.len(),
                schema.row_width(),
                "{} row has wrong width: {:?}",
                relation,
                row
            );
            for (column, (start, end)) in schema.columns.iter().zip(schema.column_spans()) {
                assert_eq!(end - start, column.width);
                if end < row.len() {
                    assert_eq!(&row[end..end + 1], " ", "{}.{}", relation, column.name);
                }
            }
            assert_eq!(cell(schema, row, "lddate"), db.lddate());
        }
    }
}

#[test]
fn every_row_matches_its_schema() {
    let db = build_database(&scenario_catalog(), &ExportOptions::default()).unwrap();
    assert_layout(&db);
}

#[test]
fn oversized_text_is_truncated() {
    let long_name = "An Extraordinarily Long Earthquake Name";
    let event = Event::new("smi:test/event/1")
        .with_description(EventDescription::new(long_name, EventDescriptionType::EarthquakeName))
        .with_creation_info(CreationInfo::by_agency("International Seismological Centre"))
        .with_origin(Origin::new("smi:test/origin/1", 0.0, 0.0, 0.0, origin_time()))
        .with_preferred_origin("smi:test/origin/1");

    let db = build_database(&catalog().with_event(event), &ExportOptions::default()).unwrap();
    assert_layout(&db);

    let row = &db.rows(Relation::Event)[0];
    assert_eq!(cell(Relation::Event.schema(), row, "evname"), "An Extraordinar");
    assert_eq!(cell(Relation::Event.schema(), row, "auth"), "International S");
}

#[test]
fn lddate_is_identical_everywhere() {
    let db = build_database(&scenario_catalog(), &ExportOptions::default()).unwrap();
    assert_eq!(db.lddate().len(), LDDATE_WIDTH);
    for relation in db.populated() {
        for row in db.rows(relation) {
            assert!(row.ends_with(LDDATE), "{}: {:?}", relation, row);
        }
    }
}

fn arb_text() -> impl Strategy<Value = String> {
    "[ -~\n]{0,120}"
}

fn arb_arrival(e: usize, o: usize) -> impl Strategy<Value = Vec<Arrival>> {
    proptest::collection::vec(
        (
            proptest::option::of(0.0f64..360.0),
            proptest::collection::vec(arb_text(), 0..3),
            proptest::option::of("[ -~]{0,40}"),
        ),
        0..4,
    )
    .prop_map(move |picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(a, (azimuth, comments, author))| {
                let mut arrival = Arrival::new(format!("smi:prop/arrival/{}/{}/{}", e, o, a));
                arrival.azimuth = azimuth;
                arrival.comments = comments.into_iter().map(Comment::new).collect();
                arrival.creation_info = author.map(CreationInfo::by_author);
                arrival
            })
            .collect()
    })
}

fn arb_event(e: usize) -> impl Strategy<Value = Event> {
    (
        proptest::collection::vec(
            (-90.0f64..90.0, -180.0f64..180.0, 0.0f64..700_000.0),
            1..3,
        ),
        proptest::collection::vec(arb_text(), 0..3),
        "[ -~]{0,40}",
        (arb_arrival(e, 0), arb_arrival(e, 1)),
    )
        .prop_map(move |(origins, comments, name, (first, second))| {
            let arrivals = [first, second];
            let mut event = Event::new(format!("smi:prop/event/{}", e));
            for (o, (lat, lon, depth)) in origins.into_iter().enumerate() {
                let mut origin = Origin::new(
                    format!("smi:prop/origin/{}/{}", e, o),
                    lat,
                    lon,
                    depth,
                    origin_time(),
                );
                if let Some(picks) = arrivals.get(o) {
                    origin.arrivals = picks.clone();
                }
                event = event.with_origin(origin);
            }
            event.comments = comments.into_iter().map(Comment::new).collect();
            event = event
                .with_description(EventDescription::new(name, EventDescriptionType::EarthquakeName))
                .with_preferred_origin(format!("smi:prop/origin/{}/0", e));
            event
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rows_keep_fixed_width(events in (0usize..4).prop_flat_map(|n| {
        (0..n).map(arb_event).collect::<Vec<_>>()
    })) {
        let mut cat = catalog();
        cat.events = events;
        let db = build_database(&cat, &ExportOptions::default()).unwrap();
        assert_layout(&db);
        prop_assert!(db.rows(Relation::Gregion).is_empty());
        prop_assert!(db.rows(Relation::Sregion).is_empty());
    }
}
