use std::fs::{self, File};

use assert_cmd::Command;
use predicates::prelude::*;

fn ngstore() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ngstore"))
}

fn gis_dir() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("tiles")).unwrap();
    File::create(tmp.path().join("roads.shp")).unwrap();
    File::create(tmp.path().join("roads.dbf")).unwrap();
    tmp
}

#[test]
fn shows_help() {
    ngstore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ngstore"))
        .stdout(predicate::str::contains("--exclude"));
}

#[test]
fn lists_directory_as_text() {
    let tmp = gis_dir();
    ngstore()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 entries)"))
        .stdout(predicate::str::contains("directory  tiles"))
        .stdout(predicate::str::contains("file       roads.shp"));
}

#[test]
fn lists_directory_as_json() {
    let tmp = gis_dir();
    let out = ngstore()
        .args(["--format", "json"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<_> = value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["tiles", "roads.dbf", "roads.shp"]);
    assert_eq!(value["entries"][0]["type"], 2);
}

#[test]
fn prints_single_entry_path() {
    let tmp = gis_dir();
    let expected = tmp.path().join("tiles");
    ngstore()
        .args(["--entry", "0"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn entry_out_of_range_fails() {
    let tmp = gis_dir();
    ngstore()
        .args(["--entry", "3"])
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn writes_listing_to_output_file() {
    let tmp = gis_dir();
    let out_dir = tempfile::tempdir().unwrap();
    let target = out_dir.path().join("listing.json");

    ngstore()
        .args(["--format", "json", "-o"])
        .arg(&target)
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"roads.shp\""));
}

#[test]
fn missing_directory_fails() {
    let tmp = tempfile::tempdir().unwrap();
    ngstore()
        .arg(tmp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn blank_exclude_pattern_is_rejected() {
    let tmp = gis_dir();
    ngstore()
        .args(["--exclude", "*.dbf, "])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exclude"));
}

#[test]
fn verbose_logs_progress_to_stderr() {
    let tmp = gis_dir();
    ngstore()
        .arg("-v")
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("loaded 3 entries"))
        .stdout(predicate::str::contains("(3 entries)"));
}

#[test]
fn quiet_by_default() {
    let tmp = gis_dir();
    ngstore()
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
