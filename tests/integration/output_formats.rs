use std::fs::File;

use ngstore::{OutputFormat, load_directory, presentation::render};
use ngstore_ports::directory::QueryOptions;

fn snapshot() -> (tempfile::TempDir, ngstore_domain::DirectoryDescriptor) {
    let tmp = tempfile::tempdir().unwrap();
    File::create(tmp.path().join("roads.geojson")).unwrap();
    let dir = load_directory(tmp.path(), &QueryOptions::default()).unwrap();
    (tmp, dir)
}

#[test]
fn json_output_matches_descriptor() {
    let (tmp, dir) = snapshot();
    let value: serde_json::Value = serde_json::from_str(&render(&dir, OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(value["path"], tmp.path().to_str().unwrap());
    assert_eq!(value["directory_name"], dir.directory_name());
    assert_eq!(value["entries"][0]["extension"], "geojson");
    assert_eq!(value["entries"][0]["kind"], "file");
    assert_eq!(
        value["entries"][0]["path"],
        tmp.path().join("roads.geojson").to_str().unwrap()
    );
}

#[test]
fn text_output_starts_with_location() {
    let (tmp, dir) = snapshot();
    let out = render(&dir, OutputFormat::Text).unwrap();

    assert_eq!(
        out.lines().next().unwrap(),
        format!("{} (1 entry)", tmp.path().display())
    );
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_output_names_the_entry() {
    let (_tmp, dir) = snapshot();
    let out = render(&dir, OutputFormat::Yaml).unwrap();
    assert!(out.contains("base_name: roads"));
    assert!(out.contains("type: 1"));
}
