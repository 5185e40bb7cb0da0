use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Reference rail network used across the CLI tests
pub const REFERENCE_EDGES: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Get a Command for trains, isolated from any user configuration
pub fn trains(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("trains");
    cmd.current_dir(dir)
        .env("TRAINS_CONFIG_DIR", dir.join(".global"))
        .env_remove("RUST_LOG")
        .env_remove("TRAINS_LOG");
    cmd
}

/// A trains Command with the reference network given inline
pub fn trains_reference(dir: &Path) -> Command {
    let mut cmd = trains(dir);
    cmd.args(["--graph", REFERENCE_EDGES]);
    cmd
}
