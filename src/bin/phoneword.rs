//! phoneword - generate and translate keypad phonewords.

use clap::Parser;
use colored::Colorize;
use std::process;

use phoneword::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::run(&cli.command) {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}
