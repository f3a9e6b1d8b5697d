//! Process duplication demo.
//!
//! Forks once. The parent prints the child's pid, the child prints its own.
//! Neither side waits for or talks to the other.

#[cfg(not(unix))]
compile_error!("proclab-fork needs a unix fork(2)");

pub mod error;
pub mod role;

use std::io::Write;
use std::process::ExitCode;

pub use error::ForkError;
pub use role::{announcement, duplicate, Role};

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    Failure = 1,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Write this image's line to `out`.
pub fn announce<W: Write>(role: Role, out: &mut W) -> Result<(), ForkError> {
    writeln!(out, "{}", role.announce())?;
    out.flush()?;
    Ok(())
}
