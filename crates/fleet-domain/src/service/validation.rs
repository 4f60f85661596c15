//! Form validation: raw field values in, entity records out
//!
//! A record is produced only when every required field is present and
//! parseable. Text fields are trimmed before the presence check.

use fleet_types::FormError;

use crate::model::{Cargo, Driver, Route, Vehicle, VehicleStatus};

/// Raw values of the vehicle registration form
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleInput<'a> {
    pub vehicle_type: &'a str,
    pub plate: &'a str,
    pub capacity: &'a str,
    pub status: &'a str,
}

/// Collects the names of blank fields, in form order
fn require<'a>(fields: &[(&'static str, &'a str)]) -> Result<Vec<&'a str>, FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(fields.iter().map(|(_, value)| value.trim()).collect())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

/// Map the vehicle form into a [`Vehicle`].
///
/// `vehicle_types` is the enumerated type catalogue; the type must match one
/// of its entries exactly.
pub fn map_vehicle(input: &VehicleInput<'_>, vehicle_types: &[String]) -> Result<Vehicle, FormError> {
    let values = require(&[
        ("type", input.vehicle_type),
        ("plate", input.plate),
        ("capacity", input.capacity),
        ("status", input.status),
    ])?;
    let (vehicle_type, plate, capacity, status) = (values[0], values[1], values[2], values[3]);

    if !vehicle_types.iter().any(|t| t == vehicle_type) {
        return Err(FormError::invalid("type", vehicle_type));
    }

    let capacity = match capacity.parse::<f64>() {
        Ok(c) if c.is_finite() && c > 0.0 => c,
        _ => return Err(FormError::invalid("capacity", capacity)),
    };

    let status: VehicleStatus = status
        .parse()
        .map_err(|raw: String| FormError::invalid("status", raw))?;

    Ok(Vehicle::new(vehicle_type, plate, capacity, status))
}

/// Map the driver form into a [`Driver`].
///
/// `is_registered` answers whether a (trimmed) name is already taken.
pub fn map_driver(
    name: &str,
    license: &str,
    is_registered: impl Fn(&str) -> bool,
) -> Result<Driver, FormError> {
    let values = require(&[("name", name), ("license", license)])?;
    let (name, license) = (values[0], values[1]);

    if is_registered(name) {
        return Err(FormError::DuplicateDriver(name.to_string()));
    }

    Ok(Driver::new(name, license))
}

/// Map the cargo form. New cargo is always pending.
pub fn map_cargo(description: &str) -> Result<Cargo, FormError> {
    let values = require(&[("description", description)])?;
    Ok(Cargo::new(values[0]))
}

pub fn map_route(origin: &str, destination: &str) -> Result<Route, FormError> {
    let values = require(&[("origin", origin), ("destination", destination)])?;
    Ok(Route::new(values[0], values[1]))
}
