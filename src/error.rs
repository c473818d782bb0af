//! Error types for scenario loading and frame stepping
//!
//! - [`ConfigError`] covers everything that can go wrong before the
//!   simulation starts (reading, parsing and validating a scenario)
//! - [`SimError`] covers frames the simulation refuses to advance

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`crate::ScenarioConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Scenario file could not be opened
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid YAML for the expected layout
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is outside the range the simulation can handle
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// A frame that could not be applied to the chain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("frame time step must be non-negative, got {0}")]
    NegativeTimeStep(f64),

    #[error("frame time step must be finite, got {0}")]
    NonFiniteTimeStep(f64),
}
