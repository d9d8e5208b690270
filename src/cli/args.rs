//! Command-line argument definitions for the outage processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::ParseConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the outage processor
///
/// Converts network-monitor outage feeds from XML into deduplicated,
/// application-ready record lists.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "outage-processor",
    version,
    about = "Convert network-monitor outage feeds from XML into application-ready record lists",
    long_about = "Parses XML outage feeds as delivered by network monitors, tolerating the data \
                  quality problems real servers produce: malformed numeric ids, colon-separated \
                  timezone offsets, and repeated entries for the same monitored node. Bad field \
                  values degrade to unset fields instead of aborting the whole feed."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the outage processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one outage feed and print the accepted records
    Parse(ParseArgs),
    /// Check one feed, or every feed under a directory, and report statistics
    Check(CheckArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Feed file to parse, or '-' for stdin
    #[arg(value_name = "INPUT", help = "Feed file to parse, or '-' for stdin")]
    pub input: PathBuf,

    /// Suppress repeated outages for the same node
    ///
    /// The feed reports one outage per monitored service, so a node with
    /// several failing services shows up several times. This keeps only the
    /// first entry per node id.
    #[arg(long = "dedup-nodes", help = "Keep only the first outage per node id")]
    pub dedup_nodes: bool,

    /// Keep records accumulated before a mid-stream feed failure
    ///
    /// By default a structurally broken feed yields no records at all.
    #[arg(
        long = "salvage-partial",
        help = "Return records accumulated before a feed failure"
    )]
    pub salvage_partial: bool,

    /// Output format for parsed records
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for parsed records"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Feed file or directory of feed files to check
    #[arg(
        value_name = "INPUT",
        help = "Feed file or directory of feed files to check"
    )]
    pub input: PathBuf,

    /// Suppress repeated outages for the same node while checking
    #[arg(long = "dedup-nodes", help = "Keep only the first outage per node id")]
    pub dedup_nodes: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.reads_stdin() {
            return Ok(());
        }

        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input is not a file: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Whether the feed should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Build the parser configuration these arguments describe
    pub fn to_parse_config(&self) -> ParseConfig {
        let mut config = ParseConfig::new();
        config.allow_duplicate_nodes = !self.dedup_nodes;
        config.salvage_partial = self.salvage_partial;
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Build the parser configuration these arguments describe
    pub fn to_parse_config(&self) -> ParseConfig {
        let mut config = ParseConfig::new();
        config.allow_duplicate_nodes = !self.dedup_nodes;
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
