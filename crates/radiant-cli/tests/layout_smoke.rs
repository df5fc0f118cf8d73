use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

const RECORDS: &str = r#"[
  { "jurisdiction": "NSW", "category": "Breath", "fines": 10, "arrests": 5, "charges": 0, "totalTests": 100 },
  { "jurisdiction": "QLD", "category": "Drug", "fines": 0, "arrests": 0, "charges": 0, "totalTests": 50 }
]"#;

fn write_records(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, RECORDS).expect("write records");
    path
}

#[test]
fn cli_lays_out_one_jurisdiction() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_records(&tmp);

    let exe = assert_cmd::cargo_bin!("radiant-cli");
    let assert = Command::new(exe)
        .args(["layout", "--jurisdiction", "NSW", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let state: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(state["status"], "layout");
    assert_eq!(state["center_label"], "NSW");
    let wedges = state["sunburst"]["wedges"].as_array().expect("wedges");
    let names: Vec<&str> = wedges.iter().filter_map(|w| w["name"].as_str()).collect();
    assert!(names.contains(&"Breath"));
    assert!(names.contains(&"Fines"));
    assert!(names.contains(&"Arrests"));
    assert!(!names.contains(&"Charges"));
}

#[test]
fn cli_reports_empty_selection_with_success_exit() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_records(&tmp);

    let exe = assert_cmd::cargo_bin!("radiant-cli");
    let assert = Command::new(exe)
        .args(["layout", "--jurisdiction", "WA", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let state: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(state["status"], "empty-selection");
}

#[test]
fn cli_lists_sorted_jurisdictions() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_records(&tmp);

    let exe = assert_cmd::cargo_bin!("radiant-cli");
    let assert = Command::new(exe)
        .args(["jurisdictions", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let list: Vec<String> = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(list, ["NSW", "QLD"]);
}

#[test]
fn cli_rejects_contract_violating_records() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("bad.json");
    fs::write(
        &path,
        r#"[{ "jurisdiction": "NSW", "category": "Breath", "fines": -1, "totalTests": 10 }]"#,
    )
    .expect("write records");

    let exe = assert_cmd::cargo_bin!("radiant-cli");
    Command::new(exe)
        .args(["layout", path.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_prints_usage_on_unknown_flag() {
    let exe = assert_cmd::cargo_bin!("radiant-cli");
    Command::new(exe)
        .args(["layout", "--bogus"])
        .assert()
        .failure()
        .code(2);
}
