use crate::cli::support::trains;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trains"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("distance"))
        .stdout(predicate::str::contains("shortest"))
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("count"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trains"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "trains {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("trains --help"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    let dir = tempdir().unwrap();
    trains(dir.path()).arg("teleport").assert().code(2);
}
