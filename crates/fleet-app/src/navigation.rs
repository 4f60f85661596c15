//! View navigation: exactly one view is active at a time

use std::str::FromStr;

use fleet_types::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Vehicles,
    Drivers,
    Cargo,
    Routes,
    Dashboard,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Vehicles,
        ViewId::Drivers,
        ViewId::Cargo,
        ViewId::Routes,
        ViewId::Dashboard,
    ];

    /// Stable identifier, used as element id in the rendered page
    pub fn id(&self) -> &'static str {
        match self {
            ViewId::Vehicles => "vehicles",
            ViewId::Drivers => "drivers",
            ViewId::Cargo => "cargo",
            ViewId::Routes => "routes",
            ViewId::Dashboard => "dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Vehicles => "Vehicles",
            ViewId::Drivers => "Drivers",
            ViewId::Cargo => "Cargo",
            ViewId::Routes => "Routes",
            ViewId::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for ViewId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ViewId::ALL
            .into_iter()
            .find(|v| v.id() == wanted)
            .ok_or_else(|| ConfigError::UnknownView(s.to_string()))
    }
}

/// Current view selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    current: ViewId,
}

impl Navigation {
    pub fn new(initial: ViewId) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn change_view(&mut self, view: ViewId) {
        self.current = view;
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.current == view
    }
}
