// ABOUTME: Main entry point for the linear-fetch application
// ABOUTME: Parses arguments, dispatches the selected operation, reports failures

use clap::Parser;

use linear_fetch_cli::cli::Cli;
use linear_fetch_cli::commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(error) = commands::run(cli) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
