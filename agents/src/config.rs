use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine tuning knobs, loadable from JSON. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Below this many seconds of remaining time the shallow depth is used
    pub time_threshold: f64,
    pub shallow_depth: u8,
    pub deep_depth: u8,
    /// Fixed RNG seed; entropy is used when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_threshold: 1.0,
            shallow_depth: 2,
            deep_depth: 5,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Search depth for the given remaining time.
    pub fn depth_for(&self, time_remaining: f64) -> u8 {
        if time_remaining < self.time_threshold {
            self.shallow_depth
        } else {
            self.deep_depth
        }
    }
}
