//! Domain layer for fleet management
//!
//! Entity records, form mapping and the derived statistics shown on the
//! dashboard. Nothing in here touches the store or the view layer.

pub mod model;
pub mod service;

pub use model::{Cargo, Driver, Route, Vehicle, VehicleStatus};
