use crate::cli::support::{trains, trains_reference};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error handling and exit code tests
// ============================================================================

#[test]
fn test_malformed_entry_is_data_error() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--graph", "AB6, AB, A4, BA6", "graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("the edge entry 'AB' is incorrect"));
}

#[test]
fn test_duplicate_edge_is_data_error() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--graph", "AB6, AB6, BA6", "graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("the edge A->B is duplicated"));
}

#[test]
fn test_missing_graph_is_data_error() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no graph given"));
}

#[test]
fn test_bad_route_is_usage_error() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["distance", "AB-C"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid route"));
}

#[test]
fn test_bad_label_is_usage_error() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "AB", "C"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_file_is_failure() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--file", "missing.txt", "graph"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--quiet", "--graph", "AB6, AB6", "graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let output = trains(dir.path())
        .args(["--format", "json", "--graph", "AB6, AB6", "graph"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "duplicate_edge");
}

#[test]
fn test_json_error_envelope_for_parse_errors() {
    let dir = tempdir().unwrap();
    let output = trains_reference(dir.path())
        .args(["--format", "json", "routes", "C", "C"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_json_error_envelope_names_bad_station() {
    let dir = tempdir().unwrap();
    let output = trains_reference(dir.path())
        .args(["--format", "json", "shortest", "AB", "C"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_value");
    assert_eq!(json["error"]["message"], "invalid station: AB");
}

#[test]
fn test_json_error_envelope_explains_stop_bound() {
    let dir = tempdir().unwrap();
    let output = trains_reference(dir.path())
        .args(["--format=json", "routes", "C", "C"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(
        json["error"]["message"],
        "routes needs exactly one of --max-stops or --exact-stops"
    );
}
