//! Cargo record

use serde::{Deserialize, Serialize};

/// Cargo waiting for, or assigned to, a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub description: String,
    /// Plate of the assigned vehicle; `None` while pending
    #[serde(default)]
    pub vehicle: Option<String>,
}

impl Cargo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vehicle: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.vehicle.is_none()
    }
}
