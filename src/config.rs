use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_IMAGE_SIZE, MAX_HISTORY_SIZE};
use crate::error::{CollageError, Result};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "COLLAGE_CONFIG";

/// Runtime configuration for the canvas core and its host window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct CollageConfig {
    /// Maximum number of document snapshots kept for undo/redo
    pub history_capacity: usize,
    /// On-screen size of a dropped image, already resolved to screen units by the host
    pub drop_footprint: f32,
    /// Title of the host window
    pub window_title: String,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            history_capacity: MAX_HISTORY_SIZE,
            drop_footprint: BASE_IMAGE_SIZE,
            window_title: "Photo Collage".to_owned(),
        }
    }
}

impl CollageConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CollageError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Load the file named by `COLLAGE_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.drop_footprint.is_finite() || self.drop_footprint < 0.0 {
            return Err(CollageError::InvalidConfig(format!(
                "drop_footprint must be a finite, non-negative number (got {})",
                self.drop_footprint
            )));
        }
        Ok(())
    }
}
