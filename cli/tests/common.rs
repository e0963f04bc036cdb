//! # ditaot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: a handle on the
//! compiled `ditaot` binary and a fake DITA-OT installation.
//!
//! The fake installation links `<home>/bin/dita` to `/bin/sh`, so a test
//! decides what the "toolkit" does by passing `-c <script>` as parameters.
//! Nothing is written to disk except the symlink.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// Returns an `assert_cmd::Command` for the compiled `ditaot` binary, with
/// `DITA_HOME` and `RUST_LOG` cleared so the host environment cannot leak in.
pub fn ditaot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ditaot").expect("Failed to find ditaot binary for testing");
    cmd.env_remove("DITA_HOME").env_remove("RUST_LOG");
    cmd
}

/// An installation directory with no launcher in it.
pub fn empty_dita_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp DITA_HOME")
}

/// An installation directory whose `bin/dita` is `/bin/sh`.
#[cfg(unix)]
pub fn shell_dita_home() -> TempDir {
    let home = empty_dita_home();
    let bin = home.path().join("bin");
    std::fs::create_dir(&bin).expect("Failed to create bin directory");
    std::os::unix::fs::symlink("/bin/sh", bin.join("dita")).expect("Failed to link launcher");
    home
}

/// Parameters that make the shell launcher run `script`.
pub fn script_params(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}
