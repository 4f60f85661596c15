//! Domain model types

pub mod cargo;
pub mod driver;
pub mod route;
pub mod vehicle;

pub use cargo::Cargo;
pub use driver::Driver;
pub use route::Route;
pub use vehicle::{Vehicle, VehicleStatus};
