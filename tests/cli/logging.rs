use crate::cli::support::trains_reference;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["--log-level", "debug", "distance", "A-B-C"])
        .assert()
        .success()
        .stdout("9\n")
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("parse_edge_list"));
}

#[test]
fn test_default_level_is_quiet() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["distance", "A-B-C"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["--verbose", "count", "C", "C", "--max-distance", "30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("enumerate_routes"));
}

#[test]
fn test_trains_log_env_var() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .env("TRAINS_LOG", "trains_core=debug")
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_graph").not())
        .stderr(predicate::str::contains("parse_edge_list"));
}

#[test]
fn test_log_json() {
    let dir = tempdir().unwrap();
    trains_reference(dir.path())
        .args(["--log-json", "--log-level", "debug", "graph"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"parse_args\""));
}
