use clap::Parser;
use std::process;
use survey_crosscheck::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the report and summary have already been emitted.
            // Discrepancies are report content, not process failures.
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
    println!("Survey Cross-Check - Pipeline Survey Verification Tool");
    println!("======================================================");
    println!();
    println!("Cross-check pipeline survey CSV files against a reference table of");
    println!("per-pipeline start and end coordinates.");
    println!();
    println!("USAGE:");
    println!("    survey-crosscheck <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    check       Run the cross-check and print or write the report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check two survey files against a reference:");
    println!("    survey-crosscheck check --reference reference.csv p1.qps p2.qps");
    println!();
    println!("    # Relax the numeric tolerance and write the report to a file:");
    println!("    survey-crosscheck check --reference reference.csv --tolerance 0.01 \\");
    println!("                            --output-file report.txt surveys/*.csv");
    println!();
    println!("    # Machine-readable output:");
    println!("    survey-crosscheck check --reference reference.csv --output-format json p1.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    survey-crosscheck check --help");
}
