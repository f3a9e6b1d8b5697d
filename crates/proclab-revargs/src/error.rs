//! Error types for argument reversal.

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Errors from an argument reversal run.
#[derive(Debug, Error)]
pub enum ReverseError {
    /// The reverse flag appeared more than once.
    #[error("too many -r")]
    TooManyFlags {
        /// Position of the first occurrence.
        first: usize,
        /// Position of the occurrence that triggered the error.
        repeat: usize,
    },

    /// Writing the output failed.
    #[error("{0}")]
    Output(#[from] io::Error),
}

impl ReverseError {
    /// Get error code for categorization.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooManyFlags { .. } => "REV_TOO_MANY_FLAGS",
            Self::Output(_) => "REV_OUTPUT",
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
