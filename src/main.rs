//! DupeSweep - Reference-Aware Duplicate Sweeper
//!
//! Entry point for the DupeSweep CLI application.

use clap::Parser;
use dupesweep::{cli::Cli, error::ExitCode};

fn main() {
    let cli = Cli::parse();

    match dupesweep::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("[{}] Error: {:#}", ExitCode::GeneralError.code_prefix(), err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
