//! Simulation configuration.
//!
//! Defaults describe the canonical run: one million subscribers, the prime
//! minister at 524287, stop once 99% of subscribers are in their component.

use std::path::Path;
use std::str::FromStr;

use callnet_sequence::SeedCoefficients;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Canonical population size.
pub const DEFAULT_POPULATION: usize = 1_000_000;

/// Canonical distinguished subscriber.
pub const DEFAULT_TARGET_NODE: usize = 524_287;

/// Canonical target component size (99% of the population).
pub const DEFAULT_TARGET_SIZE: usize = 990_000;

/// Attempts between progress checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: u64 = 100_000;

/// Safety cap on attempts.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000_000;

/// Configuration for one simulation run. Immutable once the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of subscribers `N`
    pub population: usize,
    /// Distinguished subscriber `T` whose component is watched
    pub target_node: usize,
    /// Component size `S` that ends the run
    pub target_size: usize,
    /// Coefficients seeding the call sequence
    pub seed: SeedCoefficients,
    /// Attempts between progress events; 0 disables them
    pub checkpoint_interval: u64,
    /// The run stops once attempts exceed this
    pub max_attempts: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            target_node: DEFAULT_TARGET_NODE,
            target_size: DEFAULT_TARGET_SIZE,
            seed: SeedCoefficients::CANONICAL,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SimulationConfig {
    /// Config for a custom population, keeping the canonical seed, cadence and cap.
    pub fn new(population: usize, target_node: usize, target_size: usize) -> Self {
        Self {
            population,
            target_node,
            target_size,
            ..Self::default()
        }
    }

    /// Set the checkpoint interval.
    pub fn with_checkpoint_interval(mut self, interval: u64) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    /// Set the safety cap.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the seeding coefficients.
    pub fn with_seed(mut self, seed: SeedCoefficients) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.target_node >= self.population {
            return Err(ConfigError::TargetNodeOutOfRange {
                node: self.target_node,
                population: self.population,
            });
        }
        if self.target_size == 0 {
            return Err(ConfigError::ZeroTargetSize);
        }
        if self.target_size > self.population {
            return Err(ConfigError::TargetSizeTooLarge {
                size: self.target_size,
                population: self.population,
            });
        }
        Ok(())
    }

    /// Defaults overridden by `CALLNET_*` environment variables.
    ///
    /// Recognised: `CALLNET_POPULATION`, `CALLNET_TARGET_NODE`,
    /// `CALLNET_TARGET_SIZE`, `CALLNET_CHECKPOINT`, `CALLNET_MAX_ATTEMPTS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            population: read_var(&lookup, "CALLNET_POPULATION", defaults.population)?,
            target_node: read_var(&lookup, "CALLNET_TARGET_NODE", defaults.target_node)?,
            target_size: read_var(&lookup, "CALLNET_TARGET_SIZE", defaults.target_size)?,
            seed: defaults.seed,
            checkpoint_interval: read_var(
                &lookup,
                "CALLNET_CHECKPOINT",
                defaults.checkpoint_interval,
            )?,
            max_attempts: read_var(&lookup, "CALLNET_MAX_ATTEMPTS", defaults.max_attempts)?,
        })
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

fn read_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}
