use clap::Parser;
use debarker_processor::cli::{args::Args, commands};
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
    println!("Debarker Processor - Log Truck Measurement Batch Archiver");
    println!("=========================================================");
    println!();
    println!("Parse fixed-format text exports from debarker/log-truck measurement");
    println!("devices, archive the parsed batches, and export them to spreadsheets.");
    println!();
    println!("USAGE:");
    println!("    debarker_processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Parse export file(s) and archive the resulting batches");
    println!("    list        List archived batches");
    println!("    show        Display an archived batch in full");
    println!("    delete      Delete an archived batch");
    println!("    export      Export an archived batch to an .xlsx spreadsheet");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest a single export:");
    println!("    debarker_processor ingest load_0412.txt");
    println!();
    println!("    # Ingest every .txt export under a directory:");
    println!("    debarker_processor ingest --dir /mnt/usb/exports");
    println!();
    println!("    # Export an archived batch to a spreadsheet:");
    println!("    debarker_processor export load_0412.txt -o load_0412.xlsx");
    println!();
    println!("For detailed help on any command, use:");
    println!("    debarker_processor <COMMAND> --help");
}
