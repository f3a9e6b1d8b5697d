//! Error types for process duplication.

use std::io;

use thiserror::Error;

use crate::Exit;

/// Errors from the duplication demo.
#[derive(Debug, Error)]
pub enum ForkError {
    /// The OS refused to create the child process.
    #[error("fork: {}", .0.desc())]
    Duplicate(#[source] nix::Error),

    /// Writing the announcement failed.
    #[error("stdout: {0}")]
    Output(#[from] io::Error),
}

impl ForkError {
    /// Get error code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Duplicate(_) => "FORK_FAILED",
            Self::Output(_) => "FORK_OUTPUT",
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> Exit {
        Exit::Failure
    }
}
