//! `chanlog` binary.
//!
//! Usage:
//!   chanlog [--dir DIR] [--name NAME] <level> <message...> [--trace TEXT] [--notify] [--raw]

use chanlog::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
