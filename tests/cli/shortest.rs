use crate::cli::support::trains_reference;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Shortest command tests
// ============================================================================

#[test]
fn test_shortest_a_to_c() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stdout("9 (A-B-C)\n");
}

#[test]
fn test_shortest_round_trip() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "B", "B"])
        .assert()
        .success()
        .stdout("9 (B-C-E-B)\n");
}

#[test]
fn test_lowercase_labels() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "c", "c"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9 ("));
}

#[test]
fn test_unreachable_station() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "B", "A"])
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_unknown_station_is_no_such_route() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["shortest", "A", "Z"])
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_shortest_json() {
    let dir = tempdir().unwrap();
    let output = trains_reference(dir.path())
        .args(["--format", "json", "shortest", "A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "C");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], "A-B-C");
    assert_eq!(json["distance"], 9);
}
