//! Check command implementation for the outage processor CLI
//!
//! Parses one feed, or every feed discovered under a directory, and reports
//! aggregate statistics. Structural failures are collected per file and turn
//! into a non-zero exit.

use super::shared::{create_progress_bar, setup_logging};
use crate::app::services::feed_scanner::discover_feed_files;
use crate::app::services::outage_parser::OutageFeedParser;
use crate::cli::args::CheckArgs;
use crate::{Error, Result};
use colored::Colorize;
use tracing::{debug, info};

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting outage feed check: {}", args.input.display());
    args.validate()?;

    let files = if args.input.is_dir() {
        discover_feed_files(&args.input)?
    } else {
        vec![args.input.clone()]
    };

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No feed files found under {}",
            args.input.display()
        )));
    }

    let parser = OutageFeedParser::new(args.to_parse_config());

    let progress_bar = if args.show_progress() && files.len() > 1 {
        Some(create_progress_bar(files.len() as u64, "Checking feeds"))
    } else {
        None
    };

    let mut outages_parsed = 0;
    let mut duplicates_suppressed = 0;
    let mut field_errors = 0;
    let mut failures: Vec<(String, Error)> = Vec::new();

    for file in &files {
        match parser.parse_file(file) {
            Ok(result) => {
                debug!(
                    "{}: {} outages, {} duplicates, {} field errors",
                    file.display(),
                    result.stats.outages_parsed,
                    result.stats.duplicates_suppressed,
                    result.stats.field_errors
                );
                outages_parsed += result.stats.outages_parsed;
                duplicates_suppressed += result.stats.duplicates_suppressed;
                field_errors += result.stats.field_errors;
            }
            Err(e) => {
                failures.push((file.display().to_string(), e));
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Check complete");
    }

    print_summary(
        files.len(),
        outages_parsed,
        duplicates_suppressed,
        field_errors,
        &failures,
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::feed_format(format!(
            "{} of {} feeds failed structural checks",
            failures.len(),
            files.len()
        )))
    }
}

fn print_summary(
    files_checked: usize,
    outages_parsed: usize,
    duplicates_suppressed: usize,
    field_errors: usize,
    failures: &[(String, Error)],
) {
    println!();
    println!("Feed check summary");
    println!("  Files checked:         {}", files_checked);
    println!("  Outages accepted:      {}", outages_parsed);
    println!("  Duplicates suppressed: {}", duplicates_suppressed);

    if field_errors > 0 {
        println!(
            "  Field errors:          {}",
            field_errors.to_string().yellow()
        );
    } else {
        println!("  Field errors:          0");
    }

    if failures.is_empty() {
        println!("  Structural failures:   {}", "0".green());
    } else {
        println!(
            "  Structural failures:   {}",
            failures.len().to_string().red().bold()
        );
        for (file, error) in failures {
            println!("    {} {}", file.red(), error);
        }
    }
}
