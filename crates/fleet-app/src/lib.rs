//! Application layer for fleet-manager
//!
//! Ties the store, the domain services and the view layer into a
//! [`FleetSession`] that the CLI and the GUI both drive.

pub mod config;
pub mod form;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod view;

pub use config::Config;
pub use form::{AssignmentForm, CargoForm, DriverForm, EntryForm, RouteForm, VehicleForm};
pub use navigation::{Navigation, ViewId};
pub use session::{FleetSession, Notice, RenderedViews};
