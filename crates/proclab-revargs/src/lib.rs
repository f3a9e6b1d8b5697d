//! Argument reverser.
//!
//! Prints each command-line token on its own line. When the token list holds
//! a single `-r`, that token is dropped and every other token is printed
//! with its characters reversed. A second `-r` is a usage error, detected
//! before anything is written.

pub mod error;
pub mod reverse;
pub mod scan;

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

pub use error::ReverseError;
pub use reverse::{reverse_str, reverse_token};
pub use scan::{is_reverse_flag, scan_flag, FlagScan, REVERSE_FLAG};

/// Second pass: the lines to print for an already scanned token list.
pub fn emit<T: AsRef<OsStr>>(tokens: &[T], scan: FlagScan) -> Vec<OsString> {
    match scan.position() {
        Some(flag) => tokens
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != flag)
            .map(|(_, token)| reverse_token(token.as_ref()))
            .collect(),
        None => tokens
            .iter()
            .map(|token| token.as_ref().to_os_string())
            .collect(),
    }
}

/// Both passes without any I/O.
pub fn plan<T: AsRef<OsStr>>(tokens: &[T]) -> Result<Vec<OsString>, ReverseError> {
    let scan = scan_flag(tokens)?;
    Ok(emit(tokens, scan))
}

/// Run the reverser over `tokens`, writing one line per emitted token.
///
/// Returns the number of lines written. Nothing reaches `out` when the flag
/// scan fails.
pub fn run<T, W>(tokens: &[T], out: &mut W) -> Result<usize, ReverseError>
where
    T: AsRef<OsStr>,
    W: Write,
{
    let lines = plan(tokens)?;
    for line in &lines {
        write_line(out, line)?;
    }
    out.flush()?;
    Ok(lines.len())
}

#[cfg(unix)]
fn write_line<W: Write>(out: &mut W, token: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(token.as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_line<W: Write>(out: &mut W, token: &OsStr) -> io::Result<()> {
    writeln!(out, "{}", token.to_string_lossy())
}
