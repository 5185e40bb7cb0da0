use crate::cli::support::trains_reference;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Routes command tests
// ============================================================================

#[test]
fn test_routes_max_stops() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["routes", "C", "C", "--max-stops", "3"])
        .assert()
        .success()
        .stdout("C-D-C (2 stops)\nC-E-B-C (3 stops)\n");
}

#[test]
fn test_routes_max_stops_is_exhaustive() {
    let dir = tempdir().unwrap();
    let output = trains_reference(dir.path())
        .args(["--format", "json", "routes", "A", "C", "--max-stops", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "max-stops");
    assert_eq!(json["count"], 6);
    assert_eq!(json["truncated"], false);

    let mut paths: Vec<&str> = json["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap())
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "A-B-C",
            "A-B-C-D-C",
            "A-D-C",
            "A-D-C-D-C",
            "A-D-E-B-C",
            "A-E-B-C"
        ]
    );
}

#[test]
fn test_routes_exact_stops() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args([
            "--format",
            "records",
            "routes",
            "A",
            "C",
            "--exact-stops",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("bound=exact-stops limit=4 count=3"))
        .stdout(predicate::str::contains("R A-B-C-D-C stops=4"))
        .stdout(predicate::str::contains("R A-D-C-D-C stops=4"))
        .stdout(predicate::str::contains("R A-D-E-B-C stops=4"));
}

#[test]
fn test_routes_none_found() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["routes", "B", "A", "--max-stops", "10"])
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_routes_needs_a_bound() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["routes", "C", "C"])
        .assert()
        .code(2);
}

#[test]
fn test_routes_rejects_both_bounds() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["routes", "C", "C", "--max-stops", "3", "--exact-stops", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_routes_max_routes_truncates() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["routes", "A", "C", "--max-stops", "4", "--max-routes", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stops)").count(2))
        .stderr(predicate::str::contains("max_routes"));
}

#[test]
fn test_routes_truncation_note_respects_quiet() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args([
            "--quiet",
            "routes",
            "A",
            "C",
            "--max-stops",
            "4",
            "--max-routes",
            "2",
        ])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
