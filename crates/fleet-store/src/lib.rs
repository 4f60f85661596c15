//! In-memory store for the tracked entity lists
//!
//! One ordered list per entity kind. Records have no identity beyond their
//! position in the list. Nothing is written to disk.

use fleet_domain::{Cargo, Driver, Route, Vehicle};
use fleet_types::FormError;
use serde::Serialize;
use tracing::debug;

/// An entity kind tracked by the store
pub trait Entity: Sized {
    /// Name used in logs and view titles
    const KIND: &'static str;

    fn list(store: &FleetStore) -> &[Self];

    fn list_mut(store: &mut FleetStore) -> &mut Vec<Self>;
}

/// Application state: every tracked list
#[derive(Debug, Clone, Default, Serialize)]
pub struct FleetStore {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    cargo: Vec<Cargo>,
    routes: Vec<Route>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the list of its kind, returning its position
    pub fn push<E: Entity>(&mut self, entity: E) -> usize {
        let list = E::list_mut(self);
        list.push(entity);
        debug!(kind = E::KIND, len = list.len(), "record appended");
        list.len() - 1
    }

    pub fn all<E: Entity>(&self) -> &[E] {
        E::list(self)
    }

    pub fn len_of<E: Entity>(&self) -> usize {
        E::list(self).len()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn cargo(&self) -> &[Cargo] {
        &self.cargo
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find a driver by exact name
    pub fn find_driver(&self, name: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.name == name)
    }

    pub fn has_driver(&self, name: &str) -> bool {
        self.find_driver(name).is_some()
    }

    /// Find vehicle by license plate
    pub fn find_vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate == plate)
    }

    /// Assign the cargo at `index` to the vehicle with `plate`.
    ///
    /// Both must exist; otherwise nothing changes.
    pub fn assign_cargo(&mut self, index: usize, plate: &str) -> Result<(), FormError> {
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(FormError::MissingFields(vec!["vehicle"]));
        }
        if self.find_vehicle_by_plate(plate).is_none() {
            return Err(FormError::UnknownVehicle(plate.to_string()));
        }
        let cargo = self
            .cargo
            .get_mut(index)
            .ok_or(FormError::CargoNotFound(index))?;
        cargo.vehicle = Some(plate.to_string());
        Ok(())
    }
}

impl Entity for Vehicle {
    const KIND: &'static str = "vehicle";

    fn list(store: &FleetStore) -> &[Self] {
        &store.vehicles
    }

    fn list_mut(store: &mut FleetStore) -> &mut Vec<Self> {
        &mut store.vehicles
    }
}

impl Entity for Driver {
    const KIND: &'static str = "driver";

    fn list(store: &FleetStore) -> &[Self] {
        &store.drivers
    }

    fn list_mut(store: &mut FleetStore) -> &mut Vec<Self> {
        &mut store.drivers
    }
}

impl Entity for Cargo {
    const KIND: &'static str = "cargo";

    fn list(store: &FleetStore) -> &[Self] {
        &store.cargo
    }

    fn list_mut(store: &mut FleetStore) -> &mut Vec<Self> {
        &mut store.cargo
    }
}

impl Entity for Route {
    const KIND: &'static str = "route";

    fn list(store: &FleetStore) -> &[Self] {
        &store.routes
    }

    fn list_mut(store: &mut FleetStore) -> &mut Vec<Self> {
        &mut store.routes
    }
}
