//! Vehicle record and operating status

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operating status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    #[serde(rename = "In-Transit")]
    InTransit,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Available,
        VehicleStatus::InTransit,
        VehicleStatus::Maintenance,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InTransit => "In-Transit",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }

    /// CSS class of the status badge in the vehicle table
    pub fn badge_class(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "badge-available",
            VehicleStatus::InTransit => "badge-in-transit",
            VehicleStatus::Maintenance => "badge-maintenance",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "available" => Ok(VehicleStatus::Available),
            "intransit" => Ok(VehicleStatus::InTransit),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            _ => Err(s.to_string()),
        }
    }
}

/// Registered vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle type, one of the configured catalogue (e.g. "Truck")
    pub vehicle_type: String,
    /// License plate, free text
    pub plate: String,
    /// Load capacity in tons
    pub capacity: f64,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(
        vehicle_type: impl Into<String>,
        plate: impl Into<String>,
        capacity: f64,
        status: VehicleStatus,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            plate: plate.into(),
            capacity,
            status,
        }
    }
}
