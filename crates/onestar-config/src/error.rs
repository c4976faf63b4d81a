//! Error types for configuration loading and resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field held a value that cannot be used.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// An explicitly requested settings file could not be read.
    #[error("failed to read settings file {}", path.display())]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The settings file exists but is not a valid settings document.
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// The endpoint URL assembled from host, port, and section is invalid.
    #[error("invalid library endpoint '{value}'")]
    Endpoint {
        /// URL text that failed to parse.
        value: String,
        /// Underlying URL parse error.
        source: url::ParseError,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidField {
            field,
            value: Some(value.to_string()),
            reason,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
