#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;
use tempfile::TempDir;

/// Sample-data accounts: (login, password).
pub const KEPSEK: (&str, &str) = ("kepsek", "196805121990032004");
pub const AHMAD: (&str, &str) = ("198703152010011002", "198703152010011002");
pub const DEWI: (&str, &str) = ("dewi", "dewi123");

/// The binary with its config directory pointed at `home`.
pub fn sl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("siaplapor");
    cmd.env("SIAPLAPOR_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, isolated config directory.
pub fn home() -> TempDir {
    tempfile::tempdir().expect("create temp home")
}

/// Log in against the sample dataset.
pub fn login_offline(home: &Path, who: (&str, &str)) {
    sl(home)
        .args(["--offline", "login", who.0, "--password", who.1])
        .assert()
        .success();
}
