//! # ditaot CLI Run Integration Tests
//!
//! File: cli/tests/run.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! End-to-end tests for `ditaot run`. The launcher is the fake installation
//! from `common::shell_dita_home`, so these run on Unix only, except for the
//! configuration and spawn-failure cases.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_run_without_dita_home_fails() {
    ditaot_cmd()
        .args(["run", "--", "--format=html5"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "DITA_HOME environmental variable is not found",
        ));
}

#[test]
fn test_run_missing_launcher_prints_error_message() {
    let home = empty_dita_home();
    let assert = ditaot_cmd()
        .env("DITA_HOME", home.path())
        .args(["run", "--", "--format=html5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 1, "expected one message line: {stdout:?}");
}

#[test]
fn test_run_missing_launcher_logs_launcher_path() {
    let home = empty_dita_home();
    let launcher_name = if cfg!(windows) { "dita.bat" } else { "dita" };
    let launcher = home.path().join("bin").join(launcher_name);
    ditaot_cmd()
        .env("DITA_HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("run")
        .assert()
        .success()
        .stderr(predicate::str::contains("DITA OT process failed"))
        .stderr(predicate::str::contains(launcher.display().to_string()));
}

#[test]
fn test_run_empty_dita_home_is_spawn_failure() {
    let assert = ditaot_cmd()
        .env("DITA_HOME", "")
        .args(["run", "--", "--format=html5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("environmental variable is not found").not());
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 1, "expected one message line: {stdout:?}");
}

#[cfg(unix)]
#[test]
fn test_run_reports_stderr_lines() {
    let home = shell_dita_home();
    ditaot_cmd()
        .env("DITA_HOME", home.path())
        .arg("run")
        .arg("--")
        .args(script_params(
            "printf 'ERROR: file not found\\nWARN: deprecated option\\n' >&2",
        ))
        .assert()
        .success()
        .stdout("ERROR: file not found\nWARN: deprecated option\n");
}

#[cfg(unix)]
#[test]
fn test_run_discards_stdout() {
    let home = shell_dita_home();
    ditaot_cmd()
        .env("DITA_HOME", home.path())
        .arg("run")
        .arg("--")
        .args(script_params("echo 'BUILD SUCCESSFUL'"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_run_dita_home_flag_overrides_env() {
    let home = shell_dita_home();
    let unused = empty_dita_home();
    ditaot_cmd()
        .env("DITA_HOME", unused.path())
        .arg("run")
        .arg("--dita-home")
        .arg(home.path())
        .arg("--")
        .args(script_params("echo 'WARN: from flag' >&2"))
        .assert()
        .success()
        .stdout("WARN: from flag\n");
}

#[cfg(unix)]
#[test]
fn test_run_nonzero_exit_is_not_an_error() {
    let home = shell_dita_home();
    ditaot_cmd()
        .env("DITA_HOME", home.path())
        .arg("run")
        .arg("--")
        .args(script_params("echo 'ERROR: fatal' >&2; exit 2"))
        .assert()
        .success()
        .stdout("ERROR: fatal\n");
}
