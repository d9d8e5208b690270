//! Command implementations for the outage processor CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod check;
pub mod parse;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the outage processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `parse`: parse one feed and print the accepted records
/// - `check`: batch-verify feeds and report statistics
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
