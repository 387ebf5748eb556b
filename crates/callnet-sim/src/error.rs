//! Error types for callnet-sim.

use thiserror::Error;

/// Result type for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or validating a simulation configuration.
///
/// None of these can occur once a [`Simulation`](crate::Simulation) exists;
/// running out of attempts is a status, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Population of zero subscribers
    #[error("population must contain at least one subscriber")]
    EmptyPopulation,

    /// Distinguished subscriber outside `0..population`
    #[error("target node {node} is outside the population of {population}")]
    TargetNodeOutOfRange { node: usize, population: usize },

    /// Target size of zero
    #[error("target component size must be at least 1")]
    ZeroTargetSize,

    /// Target size larger than the population
    #[error("target component size {size} exceeds the population of {population}")]
    TargetSizeTooLarge { size: usize, population: usize },

    /// Environment variable present but unparsable
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for a configuration
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
