//! Registration forms and the generic form controller
//!
//! A form holds the raw text of its inputs. Submitting maps the text into an
//! entity record; only a successful mapping touches the store, and only then
//! are the inputs cleared.

use fleet_domain::service::{map_cargo, map_driver, map_route, map_vehicle, VehicleInput};
use fleet_domain::{Cargo, Driver, Route, Vehicle};
use fleet_store::{Entity, FleetStore};
use fleet_types::FormError;

/// What a form may consult while mapping its inputs
pub struct FormContext<'a> {
    pub store: &'a FleetStore,
    pub vehicle_types: &'a [String],
}

/// A form whose submission appends one record to a store list
pub trait EntryForm {
    type Entry: Entity;

    fn map(&self, ctx: &FormContext<'_>) -> Result<Self::Entry, FormError>;

    /// Reset every input to empty
    fn clear(&mut self);
}

/// Map `form`, push the record and clear the inputs.
///
/// On failure the store and the form are left untouched.
pub fn register_item<F: EntryForm>(
    form: &mut F,
    store: &mut FleetStore,
    vehicle_types: &[String],
) -> Result<usize, FormError> {
    let entry = form.map(&FormContext {
        store: &*store,
        vehicle_types,
    })?;
    let index = store.push(entry);
    form.clear();
    Ok(index)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub vehicle_type: String,
    pub plate: String,
    pub capacity: String,
    pub status: String,
}

impl VehicleForm {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl EntryForm for VehicleForm {
    type Entry = Vehicle;

    fn map(&self, ctx: &FormContext<'_>) -> Result<Vehicle, FormError> {
        let input = VehicleInput {
            vehicle_type: &self.vehicle_type,
            plate: &self.plate,
            capacity: &self.capacity,
            status: &self.status,
        };
        map_vehicle(&input, ctx.vehicle_types)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverForm {
    pub name: String,
    pub license: String,
}

impl EntryForm for DriverForm {
    type Entry = Driver;

    fn map(&self, ctx: &FormContext<'_>) -> Result<Driver, FormError> {
        map_driver(&self.name, &self.license, |name| ctx.store.has_driver(name))
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CargoForm {
    pub description: String,
}

impl EntryForm for CargoForm {
    type Entry = Cargo;

    fn map(&self, _ctx: &FormContext<'_>) -> Result<Cargo, FormError> {
        map_cargo(&self.description)
    }

    fn clear(&mut self) {
        self.description.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteForm {
    pub origin: String,
    pub destination: String,
}

impl EntryForm for RouteForm {
    type Entry = Route;

    fn map(&self, _ctx: &FormContext<'_>) -> Result<Route, FormError> {
        map_route(&self.origin, &self.destination)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Assign pending cargo to a vehicle. Not an [`EntryForm`]: it updates an
/// existing record instead of appending one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    /// Position of the cargo in the cargo list
    pub cargo_index: String,
    pub plate: String,
}

impl AssignmentForm {
    pub fn parse_index(&self) -> Result<usize, FormError> {
        let raw = self.cargo_index.trim();
        if raw.is_empty() {
            return Err(FormError::MissingFields(vec!["cargo"]));
        }
        raw.parse().map_err(|_| FormError::invalid("cargo", raw))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
