use std::fs::{self, File};

use ngstore::{EntryOrder, load_directory};
use ngstore_ports::directory::QueryOptions;

#[test]
fn loads_snapshot_through_the_use_case() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("rasters")).unwrap();
    File::create(tmp.path().join("dem.tif")).unwrap();
    File::create(tmp.path().join("dem.tif.aux.xml")).unwrap();

    let dir = load_directory(tmp.path(), &QueryOptions::default()).unwrap();

    assert_eq!(dir.len(), 3);
    assert!(dir.is_entry_directory(0).unwrap());
    let aux = &dir.entries()[2];
    assert_eq!(aux.base_name(), "dem.tif.aux");
    assert_eq!(aux.extension(), "xml");
    assert_eq!(
        dir.entry_path(1).unwrap(),
        tmp.path().join("dem.tif").to_str().unwrap()
    );
}

#[test]
fn options_reach_the_adapter() {
    let tmp = tempfile::tempdir().unwrap();
    File::create(tmp.path().join("dem.tif")).unwrap();
    File::create(tmp.path().join("dem.tif.aux.xml")).unwrap();
    File::create(tmp.path().join(".lock")).unwrap();

    let options = QueryOptions {
        include_hidden: false,
        exclude_patterns: vec!["*.aux.xml".into()],
        order: EntryOrder::Unsorted,
        ..QueryOptions::default()
    };
    let dir = load_directory(tmp.path(), &options).unwrap();

    let names: Vec<_> = dir.entries().iter().map(|e| e.full_name()).collect();
    assert_eq!(names, vec!["dem.tif"]);
}

#[test]
fn missing_directory_is_reported_as_load_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_directory(&tmp.path().join("missing"), &QueryOptions::default()).unwrap_err();

    assert!(matches!(err, ngstore::NgStoreError::Application(_)));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn entry_index_past_the_end_is_out_of_range() {
    let tmp = tempfile::tempdir().unwrap();
    File::create(tmp.path().join("dem.tif")).unwrap();

    let dir = load_directory(tmp.path(), &QueryOptions::default()).unwrap();
    let err: ngstore::NgStoreError = dir.entry_path(1).unwrap_err().into();

    assert!(err.is_index_out_of_range());
}
