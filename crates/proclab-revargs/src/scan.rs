//! First pass: locate the reverse flag.

use std::ffi::OsStr;

use crate::error::ReverseError;

/// The only token the reverser recognises.
pub const REVERSE_FLAG: &str = "-r";

/// Where the reverse flag was found, if anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagScan {
    position: Option<usize>,
}

impl FlagScan {
    /// Whether the flag was present.
    pub fn is_set(&self) -> bool {
        self.position.is_some()
    }

    /// Zero-based token position of the flag.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    fn record(&mut self, position: usize) -> Result<(), ReverseError> {
        match self.position {
            Some(first) if first != position => Err(ReverseError::TooManyFlags {
                first,
                repeat: position,
            }),
            _ => {
                self.position = Some(position);
                Ok(())
            }
        }
    }
}

/// Check whether `token` is the reverse flag.
pub fn is_reverse_flag(token: &OsStr) -> bool {
    token == OsStr::new(REVERSE_FLAG)
}

/// Scan every token for the reverse flag.
///
/// Fails on the second occurrence, before anything has been emitted.
pub fn scan_flag<T: AsRef<OsStr>>(tokens: &[T]) -> Result<FlagScan, ReverseError> {
    let mut scan = FlagScan::default();
    for (position, token) in tokens.iter().enumerate() {
        if is_reverse_flag(token.as_ref()) {
            scan.record(position)?;
            tracing::trace!(position, "reverse flag recorded");
        }
    }
    Ok(scan)
}
