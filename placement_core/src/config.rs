use crate::{ConfigError, ConfigurationError};
use bestiary_core::ImageRewrite;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration for placement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub image_rewrite: ImageRewrite,
}

impl PlacementConfig {
    /// Load and validate a placement config file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: PlacementConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        config.layout.validate().map_err(|e| ConfigError::Validation {
            error: e,
            path: path.to_path_buf(),
        })?;

        Ok(config)
    }
}

/// Grid the planner lays tokens out on, in scene pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_origin")]
    pub origin_x: f64,
    #[serde(default = "default_origin")]
    pub origin_y: f64,
    /// Horizontal and vertical distance between tokens
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Tokens per row before wrapping
    #[serde(default = "default_per_row")]
    pub per_row: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            origin_x: 1000.0,
            origin_y: 1000.0,
            spacing: 150.0,
            per_row: 5,
        }
    }
}

fn default_origin() -> f64 {
    1000.0
}
fn default_spacing() -> f64 {
    150.0
}
fn default_per_row() -> u32 {
    5
}

impl LayoutConfig {
    pub fn new(origin_x: f64, origin_y: f64, spacing: f64, per_row: u32) -> Self {
        LayoutConfig {
            origin_x,
            origin_y,
            spacing,
            per_row,
        }
    }

    /// Reject layouts that would stack tokens or never wrap
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.spacing.is_nan() || self.spacing <= 0.0 {
            return Err(ConfigurationError::NonPositiveSpacing(self.spacing));
        }
        if self.per_row == 0 {
            return Err(ConfigurationError::ZeroPerRow);
        }
        Ok(())
    }
}
