//! Parse command implementation for the outage processor CLI
//!
//! Parses a single feed and prints the accepted records in the requested
//! output format.

use super::shared::setup_logging;
use crate::app::services::outage_parser::{OutageFeedParser, ParseResult};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::constants::severity;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use tracing::{debug, info};

/// Parse command runner
pub fn run_parse(args: ParseArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting outage feed parse");
    debug!("Parse arguments: {:?}", args);

    args.validate()?;

    let parser = OutageFeedParser::new(args.to_parse_config());
    let result = if args.reads_stdin() {
        let stdin = std::io::stdin();
        parser.parse_reader(stdin.lock())?
    } else {
        parser.parse_file(&args.input)?
    };

    match args.output_format {
        OutputFormat::Human => print_human(&result),
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => print_csv(&result),
    }

    Ok(())
}

/// Print records for humans, colorized by severity
fn print_human(result: &ParseResult) {
    let stats = &result.stats;
    println!(
        "{} outages accepted ({} duplicates suppressed, {} field errors)",
        stats.outages_parsed.to_string().bold(),
        stats.duplicates_suppressed,
        stats.field_errors
    );
    println!();

    for outage in &result.outages {
        let severity_label = outage.severity.as_deref().unwrap_or("-");
        println!(
            "{:>8}  {:<13} {:<15} {:<20} {}",
            format_opt_i32(outage.id),
            colorize_severity(severity_label),
            outage.ip_address.as_deref().unwrap_or("-"),
            outage.service_name.as_deref().unwrap_or("-"),
            outage.host.as_deref().unwrap_or("-"),
        );
        println!(
            "          node {}  lost {}  regained {}",
            format_opt_i32(outage.node_id),
            format_instant(outage.if_lost_service),
            format_instant(outage.if_regained_service),
        );
        if let Some(log_message) = &outage.log_message {
            println!("          {}", log_message.dimmed());
        }
    }

    if !stats.errors.is_empty() {
        println!();
        println!("{}", "Errors:".red().bold());
        for error in &stats.errors {
            println!("  {}", error.red());
        }
    }
}

/// Print records and statistics as JSON
fn print_json(result: &ParseResult) -> Result<()> {
    let payload = serde_json::json!({
        "outages": result.outages,
        "stats": result.stats,
    });

    let rendered = serde_json::to_string_pretty(&payload)
        .map_err(|e| Error::feed_format(format!("Failed to serialize parse result: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Print records as CSV
fn print_csv(result: &ParseResult) {
    println!(
        "id,node_id,ip_address,service_name,severity,if_lost_service,if_regained_service,host,uei"
    );
    for outage in &result.outages {
        println!(
            "{},{},{},{},{},{},{},{},{}",
            csv_opt_i32(outage.id),
            csv_opt_i32(outage.node_id),
            csv_opt_str(&outage.ip_address),
            csv_opt_str(&outage.service_name),
            csv_opt_str(&outage.severity),
            csv_instant(outage.if_lost_service),
            csv_instant(outage.if_regained_service),
            csv_opt_str(&outage.host),
            csv_opt_str(&outage.uei),
        );
    }
}

fn colorize_severity(label: &str) -> colored::ColoredString {
    if label.eq_ignore_ascii_case(severity::CRITICAL) {
        label.red().bold()
    } else if label.eq_ignore_ascii_case(severity::MAJOR) {
        label.red()
    } else if label.eq_ignore_ascii_case(severity::MINOR)
        || label.eq_ignore_ascii_case(severity::WARNING)
    {
        label.yellow()
    } else if label.eq_ignore_ascii_case(severity::NORMAL)
        || label.eq_ignore_ascii_case(severity::CLEARED)
    {
        label.green()
    } else if label.eq_ignore_ascii_case(severity::INDETERMINATE) {
        label.blue()
    } else {
        label.normal()
    }
}

fn format_opt_i32(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_instant(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_rfc3339())
}

fn csv_opt_i32(value: Option<i32>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn csv_opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn csv_instant(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(String::new, |v| v.to_rfc3339())
}
