//! Command handlers

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use fleet_app::logging::{init_logging, Verbosity};
use fleet_app::{Config, FleetSession, ViewId};
use fleet_types::{OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::shell::Shell;

pub fn execute(cli: Cli) -> Result<()> {
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Shell { script } => cmd_shell(&config, format, script),
        Commands::Render { script, output } => cmd_render(&config, format, &script, output),
        Commands::Config {
            show,
            set_default_view,
            set_output,
            add_vehicle_type,
            set_capacity_unit,
            reset,
        } => cmd_config(
            config,
            cli.config.as_deref(),
            ConfigUpdate {
                show,
                set_default_view,
                set_output,
                add_vehicle_type,
                set_capacity_unit,
                reset,
            },
        ),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn cmd_shell(config: &Config, format: OutputFormat, script: Option<PathBuf>) -> Result<()> {
    let session = FleetSession::new(config);
    let mut shell = Shell::new(session, format, io::stdout().lock());

    match script {
        Some(path) => {
            info!(script = %path.display(), "running script");
            let reader = BufReader::new(File::open(&path)?);
            shell.run(reader, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), interactive)
        }
    }
}

fn cmd_render(
    config: &Config,
    format: OutputFormat,
    script: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let session = FleetSession::new(config);
    // Command feedback goes to stderr so stdout carries only the page
    let mut shell = Shell::new(session, format, io::stderr().lock());
    let reader = BufReader::new(File::open(script)?);
    shell.run(reader, false)?;

    let page = shell.session().render_page();
    match output {
        Some(path) => {
            std::fs::write(&path, page)?;
            eprintln!("Page written to {}", path.display());
        }
        None => print!("{}", page),
    }
    Ok(())
}

struct ConfigUpdate {
    show: bool,
    set_default_view: Option<String>,
    set_output: Option<OutputFormat>,
    add_vehicle_type: Option<String>,
    set_capacity_unit: Option<String>,
    reset: bool,
}

fn cmd_config(mut config: Config, path: Option<&Path>, update: ConfigUpdate) -> Result<()> {
    let mut modified = false;

    if update.reset {
        config = Config::default();
        modified = true;
        println!("Configuration reset to defaults");
    }

    if let Some(view) = update.set_default_view {
        let view: ViewId = view.parse()?;
        config.default_view = view;
        modified = true;
        println!("Default view set to: {}", view);
    }

    if let Some(format) = update.set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(vehicle_type) = update.add_vehicle_type {
        if config.add_vehicle_type(&vehicle_type) {
            modified = true;
            println!("Vehicle type added: {}", vehicle_type.trim());
        } else {
            println!("Vehicle type already present or empty: {}", vehicle_type);
        }
    }

    if let Some(unit) = update.set_capacity_unit {
        config.capacity_unit = unit.clone();
        modified = true;
        println!("Capacity unit set to: {}", unit);
    }

    if modified {
        match path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        println!("Configuration saved");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
