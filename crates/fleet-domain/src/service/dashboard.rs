//! Dashboard counters, recomputed from scratch on every update

use serde::{Deserialize, Serialize};

use crate::model::{Cargo, Driver, Vehicle, VehicleStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub available_vehicles: usize,
    pub in_transit_vehicles: usize,
    /// Every registered driver counts as active
    pub active_drivers: usize,
    /// Cargo not yet assigned to a vehicle
    pub pending_cargo: usize,
}

impl DashboardStats {
    pub fn compute(vehicles: &[Vehicle], drivers: &[Driver], cargo: &[Cargo]) -> Self {
        Self {
            available_vehicles: count_status(vehicles, VehicleStatus::Available),
            in_transit_vehicles: count_status(vehicles, VehicleStatus::InTransit),
            active_drivers: drivers.len(),
            pending_cargo: cargo.iter().filter(|c| c.is_pending()).count(),
        }
    }
}

fn count_status(vehicles: &[Vehicle], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_all_zero() {
        assert_eq!(DashboardStats::compute(&[], &[], &[]), DashboardStats::default());
    }

    #[test]
    fn test_counts() {
        let vehicles = vec![
            Vehicle::new("Truck", "A", 5.0, VehicleStatus::Available),
            Vehicle::new("Truck", "B", 5.0, VehicleStatus::InTransit),
            Vehicle::new("Van", "C", 1.0, VehicleStatus::Available),
            Vehicle::new("Van", "D", 1.0, VehicleStatus::Maintenance),
        ];
        let drivers = vec![Driver::new("Ana", "B"), Driver::new("Luis", "C")];
        let mut assigned = Cargo::new("Steel");
        assigned.vehicle = Some("B".to_string());
        let cargo = vec![Cargo::new("Pallets"), assigned];

        let stats = DashboardStats::compute(&vehicles, &drivers, &cargo);
        assert_eq!(stats.available_vehicles, 2);
        assert_eq!(stats.in_transit_vehicles, 1);
        assert_eq!(stats.active_drivers, 2);
        assert_eq!(stats.pending_cargo, 1);
    }
}
