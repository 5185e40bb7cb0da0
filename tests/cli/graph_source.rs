use crate::cli::support::{trains, REFERENCE_EDGES};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Graph source discovery tests
// ============================================================================

#[test]
fn test_graph_from_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("connections.txt"), REFERENCE_EDGES).unwrap();

    trains(dir.path())
        .args(["--file", "connections.txt", "distance", "A-B-C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_graph_file_with_line_breaks() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("connections.txt"),
        "AB5, BC4, CD8,\nDC8, DE6, AD5,\nCE2, EB3, AE7\n",
    )
    .unwrap();

    trains(dir.path())
        .args(["--file", "connections.txt", "count", "C", "C", "--max-distance", "30"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_inline_graph_overrides_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("connections.txt"), "AB1").unwrap();

    trains(dir.path())
        .args(["--graph", "AB2", "--file", "connections.txt", "distance", "A-B"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_local_config_edges() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("trains.toml"),
        format!("[graph]\nedges = \"{}\"\n", REFERENCE_EDGES),
    )
    .unwrap();

    trains(dir.path())
        .args(["shortest", "B", "B"])
        .assert()
        .success()
        .stdout("9 (B-C-E-B)\n");
}

#[test]
fn test_config_file_relative_to_config() {
    let dir = tempdir().unwrap();
    let conf_dir = dir.path().join("conf");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("connections.txt"), REFERENCE_EDGES).unwrap();
    fs::write(
        conf_dir.join("custom.toml"),
        "[graph]\nfile = \"connections.txt\"\n",
    )
    .unwrap();

    trains(dir.path())
        .args(["--config", "conf/custom.toml", "distance", "A-D"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_global_config() {
    let dir = tempdir().unwrap();
    let global = dir.path().join(".global");
    fs::create_dir_all(&global).unwrap();
    fs::write(
        global.join("config.toml"),
        format!("[graph]\nedges = \"{}\"\n", REFERENCE_EDGES),
    )
    .unwrap();

    trains(dir.path())
        .args(["distance", "A-E-B-C-D"])
        .assert()
        .success()
        .stdout("22\n");
}

#[test]
fn test_config_limits_apply() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("trains.toml"),
        format!(
            "[graph]\nedges = \"{}\"\n\n[limits]\nmax_routes = 1\n",
            REFERENCE_EDGES
        ),
    )
    .unwrap();

    trains(dir.path())
        .args(["count", "C", "C", "--max-distance", "30"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("max_routes"));

    // Flag overrides the config value
    trains(dir.path())
        .args(["count", "C", "C", "--max-distance", "30", "--max-routes", "100"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--config", "nope.toml", "graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config_is_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("trains.toml"), "[graph\nedges = ").unwrap();

    trains(dir.path())
        .arg("graph")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
