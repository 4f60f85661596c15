//! Vehicle list filtering
//!
//! Two independent equality filters, on type and on status. An unset filter
//! places no restriction.

use serde::{Deserialize, Serialize};

use crate::model::{Vehicle, VehicleStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleFilter {
    pub vehicle_type: Option<String>,
    pub status: Option<VehicleStatus>,
}

impl VehicleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one vehicle type. An empty string clears the type filter.
    pub fn by_type(mut self, vehicle_type: impl Into<String>) -> Self {
        let vehicle_type = vehicle_type.into();
        let vehicle_type = vehicle_type.trim();
        self.vehicle_type = if vehicle_type.is_empty() {
            None
        } else {
            Some(vehicle_type.to_string())
        };
        self
    }

    pub fn by_status(mut self, status: Option<VehicleStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn clear(&mut self) {
        self.vehicle_type = None;
        self.status = None;
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle_type.is_none() && self.status.is_none()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let type_ok = self
            .vehicle_type
            .as_ref()
            .map(|t| *t == vehicle.vehicle_type)
            .unwrap_or(true);
        let status_ok = self.status.map(|s| s == vehicle.status).unwrap_or(true);
        type_ok && status_ok
    }

    /// Vehicles passing the filter, in list order
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("Truck", "T-1", 5.0, VehicleStatus::Available),
            Vehicle::new("Van", "V-1", 1.5, VehicleStatus::Available),
            Vehicle::new("Truck", "T-2", 8.0, VehicleStatus::Maintenance),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let vehicles = fleet();
        let filter = VehicleFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&vehicles).len(), 3);
    }

    #[test]
    fn test_type_filter() {
        let vehicles = fleet();
        let filtered = VehicleFilter::new().by_type("Truck").apply(&vehicles);
        let plates: Vec<_> = filtered.iter().map(|v| v.plate.as_str()).collect();
        assert_eq!(plates, vec!["T-1", "T-2"]);
    }

    #[test]
    fn test_type_and_status_filters_combine() {
        let vehicles = fleet();
        let filtered = VehicleFilter::new()
            .by_type("Truck")
            .by_status(Some(VehicleStatus::Available))
            .apply(&vehicles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].plate, "T-1");
    }

    #[test]
    fn test_padded_type_still_matches() {
        let vehicles = fleet();
        let filter = VehicleFilter::new().by_type(" Truck ");
        assert_eq!(filter.vehicle_type.as_deref(), Some("Truck"));
        assert_eq!(filter.apply(&vehicles).len(), 2);
    }

    #[test]
    fn test_blank_type_means_no_restriction() {
        let filter = VehicleFilter::new().by_type("");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_clear_restores_all() {
        let vehicles = fleet();
        let mut filter = VehicleFilter::new()
            .by_type("Van")
            .by_status(Some(VehicleStatus::Maintenance));
        assert!(filter.apply(&vehicles).is_empty());
        filter.clear();
        assert_eq!(filter.apply(&vehicles).len(), 3);
    }
}
