//! Interactive shell driving a fleet session
//!
//! Each input line is one user action: a form submission, a filter change,
//! a navigation or an output request. Lines are split with shell quoting
//! rules and parsed with clap.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fleet_app::{
    AssignmentForm, CargoForm, DriverForm, FleetSession, RouteForm, VehicleForm, ViewId,
};
use fleet_domain::VehicleStatus;
use fleet_types::{Error, FormError, OutputFormat, Result};
use tracing::debug;

use crate::output::output_view;

const PROMPT: &str = "fleet> ";

#[derive(Parser)]
#[command(no_binary_name = true, name = "fleet")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Register a vehicle
    Vehicle {
        #[arg(long = "type", default_value = "")]
        vehicle_type: String,
        #[arg(long, default_value = "")]
        plate: String,
        #[arg(long, default_value = "")]
        capacity: String,
        /// Available, In-Transit or Maintenance
        #[arg(long, default_value = "")]
        status: String,
    },

    /// Register a driver
    Driver {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        license: String,
    },

    /// Register cargo
    Cargo {
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Register a route
    Route {
        #[arg(long, default_value = "")]
        origin: String,
        #[arg(long, default_value = "")]
        destination: String,
    },

    /// Assign cargo (by position) to a vehicle plate
    Assign {
        #[arg(default_value = "")]
        cargo: String,
        #[arg(default_value = "")]
        plate: String,
    },

    /// Filter the vehicle list; an empty value removes that filter
    Filter {
        #[arg(long = "type")]
        vehicle_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Remove both filters
        #[arg(long)]
        clear: bool,
    },

    /// Switch the current view
    View { view: String },

    /// Print a view (the current one by default)
    Show { view: Option<String> },

    /// Write the HTML page to a file, or print it
    Html { output: Option<PathBuf> },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Whether the shell keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    session: FleetSession,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(session: FleetSession, format: OutputFormat, out: W) -> Self {
        Self {
            session,
            format,
            out,
        }
    }

    pub fn session(&self) -> &FleetSession {
        &self.session
    }

    /// Read and execute lines until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R, interactive: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single line. Rejected input is reported to the user and is
    /// not an error; only I/O failures are.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(self.out, "Error: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        debug!(line, "executing");
        match self.dispatch(parsed.command) {
            Ok(flow) => Ok(flow),
            Err(Error::Form(e)) => {
                let notice = self
                    .session
                    .take_notice()
                    .map(|n| n.message)
                    .unwrap_or_else(|| e.notice());
                writeln!(self.out, "Warning: {} ({})", notice, e)?;
                Ok(Flow::Continue)
            }
            Err(Error::Config(e)) => {
                writeln!(self.out, "Error: {}", e)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Vehicle {
                vehicle_type,
                plate,
                capacity,
                status,
            } => {
                let mut form = VehicleForm {
                    vehicle_type,
                    plate,
                    capacity,
                    status,
                };
                let index = self.session.register_vehicle(&mut form)?;
                writeln!(self.out, "Vehicle registered (#{})", index)?;
            }
            ShellCommand::Driver { name, license } => {
                let mut form = DriverForm { name, license };
                let index = self.session.register_driver(&mut form)?;
                writeln!(self.out, "Driver registered (#{})", index)?;
            }
            ShellCommand::Cargo { description } => {
                let mut form = CargoForm { description };
                let index = self.session.register_cargo(&mut form)?;
                writeln!(self.out, "Cargo registered (#{})", index)?;
            }
            ShellCommand::Route {
                origin,
                destination,
            } => {
                let mut form = RouteForm {
                    origin,
                    destination,
                };
                let index = self.session.register_route(&mut form)?;
                writeln!(self.out, "Route registered (#{})", index)?;
            }
            ShellCommand::Assign { cargo, plate } => {
                let mut form = AssignmentForm {
                    cargo_index: cargo,
                    plate,
                };
                self.session.assign_cargo(&mut form)?;
                writeln!(self.out, "Cargo assigned")?;
            }
            ShellCommand::Filter {
                vehicle_type,
                status,
                clear,
            } => {
                if clear {
                    self.session.clear_filters();
                }
                if let Some(status) = status {
                    let status = parse_status_filter(&status)?;
                    self.session.set_status_filter(status);
                }
                if let Some(vehicle_type) = vehicle_type {
                    self.session.set_type_filter(&vehicle_type);
                }
                output_view(&mut self.out, &self.session, ViewId::Vehicles, self.format)?;
            }
            ShellCommand::View { view } => {
                let view: ViewId = view.parse()?;
                self.session.change_view(view);
                output_view(&mut self.out, &self.session, view, self.format)?;
            }
            ShellCommand::Show { view } => {
                let view = match view {
                    Some(v) => v.parse()?,
                    None => self.session.current_view(),
                };
                output_view(&mut self.out, &self.session, view, self.format)?;
            }
            ShellCommand::Html { output } => {
                let page = self.session.render_page();
                match output {
                    Some(path) => {
                        std::fs::write(&path, page)?;
                        writeln!(self.out, "Page written to {}", path.display())?;
                    }
                    None => write!(self.out, "{}", page)?,
                }
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Empty means "no status restriction"
fn parse_status_filter(raw: &str) -> std::result::Result<Option<VehicleStatus>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|raw: String| FormError::invalid("status", raw))
}
