//! TOML-based user defaults.
//!
//! Stores the parameters front ends start from when the user does not pass
//! them explicitly:
//! - Simulation inputs (rate, recovery time, seed, day count)
//! - The focus goal (session length and sessions per day)
//! - Heatmap session length and sweep effort
//!
//! Configuration is stored at `~/.config/focusblocks/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::params::{validate_threshold, validate_trials, SimulationParameters};
use crate::stats::DEFAULT_TRIALS_PER_CELL;

/// Simulation input defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_rate")]
    pub rate_per_hour: f64,
    #[serde(default = "default_recovery")]
    pub recovery_minutes: f64,
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_day_count")]
    pub day_count: usize,
}

/// What counts as a successful day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_threshold")]
    pub threshold_minutes: f64,
    #[serde(default = "default_target")]
    pub target_block_count: u32,
}

/// Heatmap sweep configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "default_heatmap_threshold")]
    pub threshold_minutes: f64,
    #[serde(default = "default_trials")]
    pub trials_per_cell: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusblocks/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub goal: GoalConfig,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
}

// Default functions
fn default_rate() -> f64 {
    1.0
}
fn default_recovery() -> f64 {
    11.0
}
fn default_seed() -> i64 {
    12345
}
fn default_day_count() -> usize {
    100
}
fn default_threshold() -> f64 {
    60.0
}
fn default_target() -> u32 {
    1
}
fn default_heatmap_threshold() -> f64 {
    45.0
}
fn default_trials() -> usize {
    DEFAULT_TRIALS_PER_CELL
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rate_per_hour: default_rate(),
            recovery_minutes: default_recovery(),
            seed: default_seed(),
            day_count: default_day_count(),
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            threshold_minutes: default_threshold(),
            target_block_count: default_target(),
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            threshold_minutes: default_heatmap_threshold(),
            trials_per_cell: default_trials(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(unknown());
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing the default there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without persisting it.
    ///
    /// The updated config must still describe a valid simulation, otherwise
    /// the change is rejected and `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is out of range.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated
            .parameters()
            .validate()
            .map_err(|e| invalid(e.to_string()))?;
        validate_threshold(updated.heatmap.threshold_minutes)
            .and_then(|()| validate_trials(updated.heatmap.trials_per_cell))
            .map_err(|e| invalid(e.to_string()))?;

        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Config::apply`] rejects the change or the
    /// config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Simulation parameters described by this config.
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            interruptions_per_hour: self.simulation.rate_per_hour,
            recovery_minutes: self.simulation.recovery_minutes,
            threshold_minutes: self.goal.threshold_minutes,
            target_block_count: self.goal.target_block_count,
            seed: self.simulation.seed,
            day_count: self.simulation.day_count,
            selected_day: None,
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
