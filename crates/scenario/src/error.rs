use thiserror::Error;

/// Configuration loading and validation errors
///
/// All of these are raised before the script runs; a failed run never
/// produces a partial event log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
