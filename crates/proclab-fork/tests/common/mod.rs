//! Common test utilities for driving the `forkdemo` binary.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;

/// Logging variables that must not leak into a test run.
pub const LOG_VARS: &[&str] = &[
    "RUST_LOG",
    "PROCLAB_LOG_LEVEL",
    "PROCLAB_LOG_FORMAT",
    "PROCLAB_LOG_FILE",
    "PROCLAB_LOG_SOURCE",
];

/// A `forkdemo` command with a clean logging environment.
pub fn forkdemo() -> Command {
    let mut cmd = Command::cargo_bin("forkdemo").expect("Binary not found");
    for var in LOG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_stderr_contains(&self, text: &str);
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

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{}'\nstderr: {}",
            text,
            stderr
        );
    }

    fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Pull the trailing pid out of an announcement line.
pub fn trailing_pid(line: &str, prefix: &str) -> Option<i32> {
    line.strip_prefix(prefix)?.trim().parse().ok()
}
