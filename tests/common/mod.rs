//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a schoolctl command with config and session state isolated
/// in a throwaway home directory.
pub fn schoolctl(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("schoolctl"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SCHOOLCTL_BASE_URL")
        .env_remove("SCHOOLCTL_SERVICE_URL");
    cmd
}

pub fn temp_home() -> TempDir {
    TempDir::new().unwrap()
}
