//! Identifier density and stability across relations

use crate::common::*;
use std::collections::BTreeSet;

fn column_values(rows: &[String], relation: Relation, name: &str) -> Vec<i64> {
    rows.iter()
        .map(|r| int_cell(relation.schema(), r, name))
        .collect()
}

#[test]
fn ids_are_dense_per_kind() {
    let out = ExportDir::new();
    export_catalog(&grid_catalog(3, 2, 4), &out.basename).unwrap();

    let evids: BTreeSet<i64> =
        column_values(&out.rows(Relation::Event), Relation::Event, "evid").into_iter().collect();
    assert_eq!(evids, (1..=3).collect());

    let orids: BTreeSet<i64> =
        column_values(&out.rows(Relation::Origin), Relation::Origin, "orid").into_iter().collect();
    assert_eq!(orids, (1..=6).collect());

    let arrival_rows = out.rows(Relation::Arrival);
    let arids: BTreeSet<i64> = column_values(&arrival_rows, Relation::Arrival, "arid")
        .into_iter()
        .collect();
    assert_eq!(arids, (1..=24).collect());
}

#[test]
fn ids_follow_first_encounter_order() {
    let out = ExportDir::new();
    export_catalog(&grid_catalog(2, 2, 2), &out.basename).unwrap();

    let arids = column_values(&out.rows(Relation::Arrival), Relation::Arrival, "arid");
    assert_eq!(arids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let orids = column_values(&out.rows(Relation::Origin), Relation::Origin, "orid");
    assert_eq!(orids, vec![1, 2, 3, 4]);
}

#[test]
fn foreign_keys_resolve_to_owning_rows() {
    let out = ExportDir::new();
    export_catalog(&grid_catalog(2, 2, 3), &out.basename).unwrap();

    let origin_rows = out.rows(Relation::Origin);
    let origin_evids = column_values(&origin_rows, Relation::Origin, "evid");
    assert_eq!(origin_evids, vec![1, 1, 2, 2]);

    let assoc_rows = out.rows(Relation::Assoc);
    let assoc_orids = column_values(&assoc_rows, Relation::Assoc, "orid");
    assert_eq!(assoc_orids, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    let assoc_arids = column_values(&assoc_rows, Relation::Assoc, "arid");
    let arrival_arids = column_values(&out.rows(Relation::Arrival), Relation::Arrival, "arid");
    assert_eq!(assoc_arids, arrival_arids);

    assert_eq!(out.rows(Relation::Stassoc).len(), arrival_arids.len());
    assert_eq!(out.rows(Relation::Origerr).len(), origin_rows.len());
}

#[test]
fn preferred_origin_pointer_matches_origin_row() {
    let origin = |id: &str, depth: f64| Origin::new(id, 0.0, 0.0, depth, origin_time());
    let event = Event::new("smi:test/event/1")
        .with_origin(origin("smi:test/origin/a", 1000.0))
        .with_origin(origin("smi:test/origin/b", 2000.0))
        .with_origin(origin("smi:test/origin/c", 3000.0))
        .with_preferred_origin("smi:test/origin/c");

    let out = ExportDir::new();
    export_catalog(&catalog().with_event(event), &out.basename).unwrap();

    let prefor = int_cell(Relation::Event.schema(), &out.rows(Relation::Event)[0], "prefor");
    let preferred_row = out
        .rows(Relation::Origin)
        .into_iter()
        .find(|r| cell(Relation::Origin.schema(), r, "depth") == "3.0000")
        .unwrap();
    assert_eq!(int_cell(Relation::Origin.schema(), &preferred_row, "orid"), prefor);

    let orids: BTreeSet<i64> =
        column_values(&out.rows(Relation::Origin), Relation::Origin, "orid").into_iter().collect();
    assert_eq!(orids, (1..=3).collect());
}

#[test]
fn repeated_identity_reuses_id() {
    // The same arrival pick associated with two origins keeps one arid
    let shared = Arrival::new("smi:test/arrival/shared").with_azimuth(12.0);
    let event = Event::new("smi:test/event/1")
        .with_origin(
            Origin::new("smi:test/origin/1", 0.0, 0.0, 0.0, origin_time())
                .with_arrival(shared.clone()),
        )
        .with_origin(
            Origin::new("smi:test/origin/2", 0.0, 0.0, 0.0, origin_time()).with_arrival(shared),
        )
        .with_preferred_origin("smi:test/origin/1");

    let out = ExportDir::new();
    export_catalog(&catalog().with_event(event), &out.basename).unwrap();

    let arids = column_values(&out.rows(Relation::Assoc), Relation::Assoc, "arid");
    assert_eq!(arids, vec![1, 1]);
    let orids = column_values(&out.rows(Relation::Assoc), Relation::Assoc, "orid");
    assert_eq!(orids, vec![1, 2]);
}

#[test]
fn ids_restart_for_each_export() {
    let first = ExportDir::new();
    let second = ExportDir::new();
    export_catalog(&grid_catalog(2, 1, 1), &first.basename).unwrap();
    export_catalog(&grid_catalog(2, 1, 1), &second.basename).unwrap();

    let evids = column_values(&second.rows(Relation::Event), Relation::Event, "evid");
    assert_eq!(evids, vec![1, 2]);
}
