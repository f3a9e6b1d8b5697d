//! `revargs` - print arguments one per line, reversed when `-r` is given.
//!
//! Every argument is an opaque token; there is no option parser.

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use proclab_common_log::{debug, LogConfig};
use proclab_revargs::run;

fn main() -> ExitCode {
    if let Err(e) = proclab_common_log::init(LogConfig::from_env()) {
        eprintln!("warning: {e}");
    }

    let tokens: Vec<OsString> = std::env::args_os().skip(1).collect();
    debug!(tokens = tokens.len(), "reversing arguments");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&tokens, &mut out) {
        Ok(lines) => {
            debug!(lines, "arguments written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(code = e.code(), "{e}");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
