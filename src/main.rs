use clap::Parser;
use outage_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Outage Processor - Network Monitor Feed Converter");
    println!("=================================================");
    println!();
    println!("Convert network-monitor outage feeds from XML into deduplicated,");
    println!("application-ready record lists.");
    println!();
    println!("USAGE:");
    println!("    outage-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse one outage feed and print the accepted records");
    println!("    check       Check feeds and report statistics without printing records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a feed file, keeping only the first outage per node:");
    println!("    outage-processor parse outages.xml --dedup-nodes");
    println!();
    println!("    # Parse a feed from stdin as JSON:");
    println!("    curl -u admin:admin http://localhost:8980/opennms/rest/outages \\");
    println!("        | outage-processor parse - --output-format json");
    println!();
    println!("    # Check every feed under a directory:");
    println!("    outage-processor check ./feeds/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    outage-processor <COMMAND> --help");
}
