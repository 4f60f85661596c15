//! Fleet Manager - in-memory fleet management from the terminal
//!
//! Register vehicles, drivers, cargo and routes in an interactive shell and
//! render the result as tables, JSON or an HTML page.

mod cli;
mod commands;
mod output;
mod shell;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
