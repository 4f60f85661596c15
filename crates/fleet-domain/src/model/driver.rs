//! Driver record

use serde::{Deserialize, Serialize};

/// Registered driver. Names are unique within the driver list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub license: String,
    /// Trip history, empty at registration
    #[serde(default)]
    pub history: Vec<String>,
}

impl Driver {
    pub fn new(name: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: license.into(),
            history: Vec::new(),
        }
    }

    pub fn trip_count(&self) -> usize {
        self.history.len()
    }
}
