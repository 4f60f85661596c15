//! Error types for fleet-manager

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Rejection of a submitted form.
///
/// Every variant means the submission was discarded and no state changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("Driver already registered: {0}")]
    DuplicateDriver(String),

    #[error("No vehicle registered with plate: {0}")]
    UnknownVehicle(String),

    #[error("No cargo at position {0}")]
    CargoNotFound(usize),
}

impl FormError {
    /// Message shown to the user in the blocking notification
    pub fn notice(&self) -> String {
        match self {
            FormError::MissingFields(_) | FormError::InvalidField { .. } => {
                "Complete all fields".to_string()
            }
            FormError::DuplicateDriver(_) => "Driver already registered".to_string(),
            FormError::UnknownVehicle(plate) => format!("Unknown vehicle: {}", plate),
            FormError::CargoNotFound(index) => format!("Unknown cargo: #{}", index),
        }
    }

    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        FormError::InvalidField {
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Command error: {0}")]
    Command(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(ConfigError::ParseError(err.to_string()))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(ConfigError::SaveError(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = FormError::MissingFields(vec!["plate", "capacity"]);
        assert_eq!(err.to_string(), "Missing required fields: plate, capacity");
        assert_eq!(err.notice(), "Complete all fields");
    }

    #[test]
    fn test_duplicate_driver_notice() {
        let err = FormError::DuplicateDriver("Ana".to_string());
        assert_eq!(err.notice(), "Driver already registered");
        assert!(err.to_string().contains("Ana"));
    }

    #[test]
    fn test_form_error_converts_into_error() {
        let err: Error = FormError::invalid("capacity", "abc").into();
        assert!(matches!(err, Error::Form(FormError::InvalidField { field: "capacity", .. })));
        assert_eq!(err.to_string(), "Invalid value for capacity: 'abc'");
    }

    #[test]
    fn test_toml_error_becomes_config_parse_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
