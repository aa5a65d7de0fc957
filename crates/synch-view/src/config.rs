//! View configuration
//!
//! One explicit configuration struct passed to the view at construction;
//! there is no global, mutable rendering configuration anywhere in this
//! crate. YAML load/save follows the usual load-or-default pattern so a
//! missing or broken config file never blocks the tool.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use synch_core::{SynchError, SynchResult};

/// Display configuration for a multi-panel view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Approximate number of datapoints each panel shows per view
    pub max_points: usize,
    /// Number of tick labels along each x axis
    pub num_xticks: usize,
    /// Decimal places shown for timestamp seconds and scaled labels
    pub num_decimals: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_points: 10_000,
            num_xticks: 10,
            num_decimals: 3,
        }
    }
}

impl ViewConfig {
    /// Load from a YAML file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("ViewConfig::load: {:?} doesn't exist, using defaults", path);
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ViewConfig::load: failed to parse {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("ViewConfig::load: failed to read {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Save as YAML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let yaml = serde_yaml::to_string(self).context("Failed to serialize view config")?;
        std::fs::write(path, yaml).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Eager validation, called once at view construction
    pub fn validate(&self) -> SynchResult<()> {
        if self.max_points == 0 {
            return Err(SynchError::InvalidBudget { max_points: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.max_points, 10_000);
        assert_eq!(config.num_xticks, 10);
        assert_eq!(config.num_decimals, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_invalid() {
        let config = ViewConfig {
            max_points: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewConfig::load(&dir.path().join("nope.yaml"));
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view").join("config.yaml");
        let config = ViewConfig {
            max_points: 5_000,
            num_xticks: 20,
            num_decimals: 6,
        };
        config.save(&path).unwrap();
        assert_eq!(ViewConfig::load(&path), config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yaml");
        std::fs::write(&path, "max_points: 123\n").unwrap();
        let config = ViewConfig::load(&path);
        assert_eq!(config.max_points, 123);
        assert_eq!(config.num_xticks, 10);
    }
}
