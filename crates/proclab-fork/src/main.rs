//! `forkdemo` - fork once and print a line from each process.

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use proclab_common_log::{debug, info, LogConfig, LogLevel};
use proclab_fork::{announce, duplicate, Exit, ForkError};

/// Fork the current process and report from both sides.
#[derive(Debug, Parser)]
#[command(name = "forkdemo", version, about, long_about = None)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error diagnostics
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run() {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            debug!(code = e.code(), "{e}");
            eprintln!("{e}");
            e.exit_code().into()
        }
    }
}

fn run() -> Result<(), ForkError> {
    // SAFETY: nothing in this binary spawns threads and the subscriber writes
    // synchronously, so the process is single-threaded here.
    let role = unsafe { duplicate() }?;
    info!(?role, pid = std::process::id(), "process duplicated");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    announce(role, &mut out)
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = proclab_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
