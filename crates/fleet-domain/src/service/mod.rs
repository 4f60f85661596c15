//! Domain services

pub mod dashboard;
pub mod filter;
pub mod validation;

pub use dashboard::DashboardStats;
pub use filter::VehicleFilter;
pub use validation::{map_cargo, map_driver, map_route, map_vehicle, VehicleInput};
