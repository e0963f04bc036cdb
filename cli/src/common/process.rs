//! # ditaot Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::process::Command` for running an external program
//! to completion and capturing both of its output streams.
//!
//! ## Architecture
//!
//! - `SpawnRequest`: program, verbatim argument list and working directory.
//! - `ProcessSpawner`: the seam between the invoker and the OS. `SystemSpawner`
//!   is the real implementation; tests substitute recording fakes.
//! - `CapturedOutput`: exit code plus stdout/stderr decoded as UTF-8.
//! - `split_lines`: line splitting used for the captured stderr.
//!
//! No shell is involved. Each argument reaches the child exactly as given.
//! stdin is closed (`Stdio::null`). `Command::output` drains stdout and stderr
//! concurrently, so the child cannot block on a full pipe.
//!
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::trace;

/// A fully specified child process launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl SpawnRequest {
    /// The argument vector handed to the OS: program first, then each argument.
    pub fn command_line(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Output of a child process that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a child process to completion and captures its output.
pub trait ProcessSpawner: Send + Sync {
    /// # Run To Completion (`run`)
    ///
    /// Starts the child described by `request` and blocks until it exits.
    ///
    /// ## Returns
    ///
    /// * `io::Result<CapturedOutput>` - Exit code and both decoded streams.
    ///
    /// ## Errors
    ///
    /// * Any `io::Error` from starting the child or collecting its output.
    fn run(&self, request: &SpawnRequest) -> io::Result<CapturedOutput>;
}

/// Spawns real OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn run(&self, request: &SpawnRequest) -> io::Result<CapturedOutput> {
        trace!(
            "Spawning {:?} in {}",
            request.command_line(),
            request.working_dir.display()
        );
        let output = Command::new(&request.program)
            .args(&request.args)
            .current_dir(&request.working_dir)
            .stdin(Stdio::null())
            .output()?;

        Ok(CapturedOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// # Split Lines (`split_lines`)
///
/// Splits captured text into lines. A line ends at `\n`, `\r` or `\r\n`.
///
/// ## Arguments
///
/// * `text` - Captured stream contents.
///
/// ## Returns
///
/// * `Vec<String>` - The lines in order, without terminators. A terminator at
///   the very end does not produce an empty final line; blank lines in the
///   middle are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(rest[..end].to_owned());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(
            split_lines("ERROR: file not found\nWARN: deprecated option\n"),
            vec!["ERROR: file not found", "WARN: deprecated option"]
        );
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert!(split_lines("").is_empty());
        // Interior blank lines are kept.
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_carriage_returns() {
        assert_eq!(
            split_lines("ERROR: a\rERROR: b\r"),
            vec!["ERROR: a", "ERROR: b"]
        );
        assert_eq!(split_lines("a\rb\r\nc\nd"), vec!["a", "b", "c", "d"]);
        // `\n\r` is two terminators, so it leaves a blank line between.
        assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_command_line_order() {
        let request = SpawnRequest {
            program: PathBuf::from("/opt/dita/bin/dita"),
            args: vec!["--input=a b.ditamap".into(), "-f".into(), "-f".into()],
            working_dir: PathBuf::from("/opt/dita"),
        };
        assert_eq!(
            request.command_line(),
            vec!["/opt/dita/bin/dita", "--input=a b.ditamap", "-f", "-f"]
        );
    }

    #[test]
    fn test_system_spawner_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let request = SpawnRequest {
            program: dir.path().join("bin").join("dita"),
            args: vec![],
            working_dir: dir.path().to_path_buf(),
        };
        let err = SystemSpawner.run(&request).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_spawner_captures_streams() {
        let dir = tempfile::tempdir().unwrap();
        let request = SpawnRequest {
            program: PathBuf::from("/bin/sh"),
            args: vec![
                "-c".into(),
                "printf 'out\\n'; printf 'err1\\nerr2\\n' >&2; pwd; exit 3".into(),
            ],
            working_dir: dir.path().to_path_buf(),
        };
        let output = SystemSpawner.run(&request).unwrap();
        assert_eq!(output.status, Some(3));
        assert!(output.stdout.starts_with("out\n"));
        assert_eq!(output.stderr, "err1\nerr2\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_spawner_decodes_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let request = SpawnRequest {
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".into(), "printf 'bad \\377 byte\\n' >&2".into()],
            working_dir: dir.path().to_path_buf(),
        };
        let output = SystemSpawner.run(&request).unwrap();
        assert_eq!(output.stderr, "bad \u{FFFD} byte\n");
        assert_eq!(split_lines(&output.stderr), vec!["bad \u{FFFD} byte"]);
    }
}
