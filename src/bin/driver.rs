use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use deci_kernel::driver::{DriverError, run_interact, run_wordbits};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Exercises the arithmetic kernel through its line-based textual protocol.
#[derive(Parser)]
#[command(name = "driver", about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of bits in one kernel word and exit.
    Wordbits,
    /// Read one command and its operands from stdin, write the result to stdout.
    Interact,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().without_time().with_target(false))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Wordbits => {
            if let Err(e) = run_wordbits(&mut out) {
                tracing::error!("writing to stdout failed: {e}");
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Command::Interact => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            match run_interact(&mut input, &mut out) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    report(e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn report(e: DriverError) {
    tracing::error!("{e}");
    let _ = writeln!(io::stderr(), "{e}");
}
