//! Common test utilities for driving the `revargs` binary.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;

/// Logging variables that must not leak into a test run.
const LOG_VARS: &[&str] = &[
    "RUST_LOG",
    "PROCLAB_LOG_LEVEL",
    "PROCLAB_LOG_FORMAT",
    "PROCLAB_LOG_FILE",
    "PROCLAB_LOG_SOURCE",
];

/// A `revargs` command with a clean logging environment.
pub fn revargs() -> Command {
    let mut cmd = Command::cargo_bin("revargs").expect("Binary not found");
    for var in LOG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_exit_code(&self, code: i32);
    fn stdout_lines(&self) -> Vec<String>;
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}",
            code,
            self.status.code()
        );
    }

    fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
