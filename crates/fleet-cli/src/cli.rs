//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use fleet_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Register and list vehicles, drivers, cargo and routes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session
    Shell {
        /// Run commands from a file instead of stdin
        #[arg(long, short = 's')]
        script: Option<PathBuf>,
    },

    /// Run a script and write the rendered HTML page
    Render {
        /// Script of shell commands
        script: PathBuf,

        /// Output HTML file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the view shown at startup (vehicles, drivers, cargo, routes, dashboard)
        #[arg(long)]
        set_default_view: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Add a vehicle type to the catalogue
        #[arg(long)]
        add_vehicle_type: Option<String>,

        /// Set the capacity unit label
        #[arg(long)]
        set_capacity_unit: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["fleet-manager", "render", "day.fleet", "-o", "out.html", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render { script, output } => {
                assert_eq!(script, PathBuf::from("day.fleet"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            _ => panic!("expected render"),
        }
    }
}
