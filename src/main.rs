use clap::Parser;
use colored::Colorize;
use relnotes::cli::Cli;
use relnotes::export;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = export::execute(&cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
