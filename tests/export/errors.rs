//! Failure modes of the export

use crate::common::*;
use std::fs;

fn event_with_origin(id: &str, origin: &str) -> Event {
    Event::new(id).with_origin(Origin::new(origin, 0.0, 0.0, 0.0, origin_time()))
}

#[test]
fn missing_preferred_origin_aborts_export() {
    let cat = catalog()
        .with_event(
            event_with_origin("smi:test/event/1", "smi:test/origin/1")
                .with_preferred_origin("smi:test/origin/1"),
        )
        .with_event(event_with_origin("smi:test/event/2", "smi:test/origin/2"));

    let out = ExportDir::new();
    let err = export_catalog(&cat, &out.basename).unwrap_err();

    match err {
        CssError::UnresolvablePreferredOrigin { event } => {
            assert_eq!(event.as_str(), "smi:test/event/2");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(out.files().is_empty());
}

#[test]
fn dangling_preferred_origin_aborts_export() {
    let cat = catalog().with_event(
        event_with_origin("smi:test/event/1", "smi:test/origin/1")
            .with_preferred_origin("smi:test/origin/elsewhere"),
    );

    let out = ExportDir::new();
    let err = export_catalog(&cat, &out.basename).unwrap_err();

    assert!(matches!(err, CssError::UnresolvablePreferredOrigin { .. }));
    assert!(err.to_string().contains("smi:test/event/1"));
    assert!(out.files().is_empty());
}

#[test]
fn preferred_origin_of_another_event_is_rejected() {
    let cat = catalog()
        .with_event(
            event_with_origin("smi:test/event/1", "smi:test/origin/1")
                .with_preferred_origin("smi:test/origin/1"),
        )
        .with_event(Event::new("smi:test/event/2").with_preferred_origin("smi:test/origin/1"));

    let out = ExportDir::new();
    let err = export_catalog(&cat, &out.basename).unwrap_err();
    assert!(matches!(err, CssError::UnresolvablePreferredOrigin { .. }));
}

#[test]
fn empty_catalog_writes_nothing() {
    let out = ExportDir::new();
    let info = export_catalog(&catalog(), &out.basename).unwrap();

    assert!(info.files.is_empty());
    assert_eq!(info.total_rows(), 0);
    assert!(out.files().is_empty());
}

#[test]
fn empty_basename_is_rejected() {
    let err = export_catalog(&scenario_catalog(), "").unwrap_err();
    assert!(matches!(err, CssError::InvalidDestination { .. }));
}

#[test]
fn directory_basename_is_rejected() {
    let out = ExportDir::new();
    let basename = format!("{}/", out.dir.path().display());

    let err = export_catalog(&scenario_catalog(), &basename).unwrap_err();
    assert!(matches!(err, CssError::InvalidDestination { .. }));
    assert!(out.files().is_empty());
}

#[test]
fn missing_parent_is_rejected_by_default() {
    let out = ExportDir::new();
    let basename = out.dir.path().join("missing").join("db");

    let err = export_catalog(&scenario_catalog(), &basename).unwrap_err();
    match err {
        CssError::InvalidDestination { path, reason } => {
            assert_eq!(path, basename);
            assert!(reason.contains("does not exist"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(!out.dir.path().join("missing").exists());
}

#[test]
fn missing_parent_created_on_request() {
    let out = ExportDir::new();
    let basename = out.dir.path().join("nested").join("deeper").join("db");
    let options = ExportOptions::default().with_create_parent_dirs(true);

    let info = export_catalog_with(&scenario_catalog(), &basename, &options).unwrap();

    assert_eq!(info.files.len(), 7);
    assert!(seiscss::relation_path(&basename, Relation::Event).is_file());
}

#[test]
fn file_as_parent_is_rejected() {
    let out = ExportDir::new();
    let blocker = out.dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let options = ExportOptions::default().with_create_parent_dirs(true);
    let err = export_catalog_with(&scenario_catalog(), blocker.join("db"), &options).unwrap_err();

    match err {
        CssError::InvalidDestination { reason, .. } => {
            assert!(reason.contains("is not a directory"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn bad_options_file_is_a_config_error() {
    let err = ExportOptions::from_toml_str("load_time = 12").unwrap_err();
    assert!(matches!(err, CssError::InvalidConfig(_)));

    let out = ExportDir::new();
    let err = ExportOptions::load(out.dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CssError::InvalidConfig(_)));
}
