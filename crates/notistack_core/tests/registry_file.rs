use notistack_core::{
    Anchor, FileRegistry, PlacementRecord, PlacementRegistry, RegistryError,
};
use std::fs;

#[test]
fn list_on_absent_file_returns_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path().join("never-written"));

    let records = registry.list_all().unwrap();
    assert!(records.is_empty());
}

#[test]
fn add_then_list_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    let record = PlacementRecord::with_id(Anchor::BottomRight, 80.0, "toast-1");
    registry.add(&record).unwrap();

    let records = registry.list_all().unwrap();
    assert_eq!(records, vec![record]);
}

#[test]
fn add_creates_parent_directories_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("per-user").join("notifications");
    let registry = FileRegistry::new(&nested);

    registry
        .add(&PlacementRecord::with_id(Anchor::TopLeft, 40.0, "a"))
        .unwrap();

    assert!(registry.registry_path().exists());
    assert_eq!(registry.list_all().unwrap().len(), 1);
}

#[test]
fn add_appends_without_disturbing_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    let first = PlacementRecord::with_id(Anchor::BottomRight, 80.0, "a");
    let second = PlacementRecord::with_id(Anchor::BottomRight, 60.0, "b");
    registry.add(&first).unwrap();
    registry.add(&second).unwrap();

    let records = registry.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.contains(&first));
    assert!(records.contains(&second));
}

#[test]
fn remove_by_id_deletes_only_matching_records() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    registry
        .add(&PlacementRecord::with_id(Anchor::BottomRight, 80.0, "keep"))
        .unwrap();
    registry
        .add(&PlacementRecord::with_id(Anchor::BottomRight, 60.0, "drop"))
        .unwrap();

    registry.remove_by_id("drop").unwrap();

    let records = registry.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "keep");
}

#[test]
fn remove_by_id_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    registry
        .add(&PlacementRecord::with_id(Anchor::TopRight, 50.0, "once"))
        .unwrap();

    registry.remove_by_id("once").unwrap();
    registry.remove_by_id("once").unwrap();

    assert!(registry.list_all().unwrap().is_empty());
}

#[test]
fn remove_on_absent_file_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path().join("never-written"));

    registry.remove_by_id("ghost").unwrap();
}

#[test]
fn persisted_layout_is_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    registry
        .add(&PlacementRecord::with_id(Anchor::CenterTop, 64.0, "wire"))
        .unwrap();

    let raw = fs::read_to_string(registry.registry_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["anchor"], "center_top");
    assert_eq!(entries[0]["id"], "wire");
    assert_eq!(entries[0]["size"], 64.0);
}

#[test]
fn empty_file_reads_as_empty_registry() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    fs::write(registry.registry_path(), "").unwrap();

    assert!(registry.list_all().unwrap().is_empty());
}

#[test]
fn malformed_file_is_surfaced_not_masked() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    fs::write(registry.registry_path(), "{ not json ]").unwrap();

    let err = registry.list_all().unwrap_err();
    assert!(matches!(err, RegistryError::Malformed { .. }));

    let err = registry
        .add(&PlacementRecord::with_id(Anchor::BottomLeft, 10.0, "x"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Malformed { .. }));
}

#[test]
fn invalid_persisted_record_is_rejected_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    fs::write(
        registry.registry_path(),
        r#"[{"anchor":"bottom_right","id":"bad","size":-5.0}]"#,
    )
    .unwrap();

    let err = registry.list_all().unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
}

#[test]
fn invalid_record_is_rejected_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let registry = FileRegistry::new(dir.path());

    let err = registry
        .add(&PlacementRecord::with_id(Anchor::TopLeft, -1.0, "neg"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
    assert!(!registry.registry_path().exists());
}

#[test]
fn user_data_dir_location_is_namespaced() {
    // Platforms without a data directory are the only None case.
    if let Some(registry) = FileRegistry::in_user_data_dir() {
        let path = registry.registry_path();
        assert!(path.ends_with("notistack/active-notifications.json"));
    }
}

#[test]
fn independent_instances_share_the_same_backing_store() {
    let dir = tempfile::tempdir().unwrap();
    let writer = FileRegistry::new(dir.path());
    let reader = FileRegistry::new(dir.path());

    writer
        .add(&PlacementRecord::with_id(Anchor::BottomRight, 80.0, "shared"))
        .unwrap();

    let records = reader.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "shared");

    reader.remove_by_id("shared").unwrap();
    assert!(writer.list_all().unwrap().is_empty());
}
