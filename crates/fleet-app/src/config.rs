//! Configuration management for fleet-manager
//!
//! Config stored at: ~/.config/fleet-manager/config.toml

use std::path::{Path, PathBuf};

use fleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

use crate::navigation::ViewId;

const CONFIG_DIR_NAME: &str = "fleet-manager";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle types offered by the registration form and the type filter
    #[serde(default = "default_vehicle_types")]
    pub vehicle_types: Vec<String>,

    /// View shown at startup
    #[serde(default)]
    pub default_view: ViewId,

    /// Default output format for the CLI (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Unit label of the capacity column
    #[serde(default = "default_capacity_unit")]
    pub capacity_unit: String,
}

fn default_vehicle_types() -> Vec<String> {
    ["Truck", "Van", "Pickup", "Trailer"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_capacity_unit() -> String {
    "ton".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vehicle_types: default_vehicle_types(),
            default_view: ViewId::default(),
            output_format: OutputFormat::default(),
            capacity_unit: default_capacity_unit(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(CONFIG_DIR_NAME);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Add a vehicle type to the catalogue. Returns false if already present.
    pub fn add_vehicle_type(&mut self, vehicle_type: &str) -> bool {
        let vehicle_type = vehicle_type.trim();
        if vehicle_type.is_empty() || self.vehicle_types.iter().any(|t| t == vehicle_type) {
            return false;
        }
        self.vehicle_types.push(vehicle_type.to_string());
        true
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Manager Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Vehicle types:  {}", self.vehicle_types.join(", "))?;
        writeln!(f, "Default view:   {}", self.default_view)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Capacity unit:  {}", self.capacity_unit)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.vehicle_types, vec!["Truck", "Van", "Pickup", "Trailer"]);
        assert_eq!(config.default_view, ViewId::Vehicles);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.capacity_unit, "ton");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_view = \"dashboard\"\noutput_format = \"json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_view, ViewId::Dashboard);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.vehicle_types.len(), 4);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.add_vehicle_type("Bus");
        config.capacity_unit = "kg".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "vehicle_types = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(fleet_types::Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_add_vehicle_type_ignores_duplicates_and_blanks() {
        let mut config = Config::default();
        assert!(!config.add_vehicle_type("Truck"));
        assert!(!config.add_vehicle_type("  "));
        assert!(config.add_vehicle_type(" Bus "));
        assert_eq!(config.vehicle_types.last().map(String::as_str), Some("Bus"));
    }
}
