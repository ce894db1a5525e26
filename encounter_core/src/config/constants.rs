//! Balance constants configuration

use super::ConfigError;
use crate::balance::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable balance constants
///
/// Passed explicitly to [`crate::evaluate_with`]; [`crate::evaluate`] uses the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConstants {
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Share of theoretical max damage a side is expected to land
    #[serde(default = "default_damage_efficiency")]
    pub damage_efficiency: f64,
}

impl Default for BalanceConstants {
    fn default() -> Self {
        BalanceConstants {
            thresholds: Thresholds::default(),
            damage_efficiency: 0.5,
        }
    }
}

fn default_damage_efficiency() -> f64 {
    0.5
}

impl BalanceConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: BalanceConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: BalanceConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check that efficiency is positive and thresholds strictly descend
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damage_efficiency.is_finite() && self.damage_efficiency > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "damage_efficiency must be positive, got {}",
                self.damage_efficiency
            )));
        }
        self.thresholds.validate()
    }
}

/// Lower bounds on the differential for each difficulty above VeryEasy
///
/// A differential at or above `suicidal` is Suicidal, at or above `hard` is
/// Hard, and so on; anything below `easy` is VeryEasy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_suicidal")]
    pub suicidal: f64,
    #[serde(default = "default_hard")]
    pub hard: f64,
    #[serde(default = "default_balanced")]
    pub balanced: f64,
    #[serde(default = "default_easy")]
    pub easy: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            suicidal: 8.0,
            hard: 2.0,
            balanced: -2.0,
            easy: -8.0,
        }
    }
}

fn default_suicidal() -> f64 {
    8.0
}
fn default_hard() -> f64 {
    2.0
}
fn default_balanced() -> f64 {
    -2.0
}
fn default_easy() -> f64 {
    -8.0
}

impl Thresholds {
    /// Classify a differential
    pub fn classify(&self, differential: f64) -> Difficulty {
        if differential >= self.suicidal {
            Difficulty::Suicidal
        } else if differential >= self.hard {
            Difficulty::Hard
        } else if differential >= self.balanced {
            Difficulty::Balanced
        } else if differential >= self.easy {
            Difficulty::Easy
        } else {
            Difficulty::VeryEasy
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [self.suicidal, self.hard, self.balanced, self.easy];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::ValidationError(
                "thresholds must be finite".to_string(),
            ));
        }
        if !bounds.windows(2).all(|w| w[0] > w[1]) {
            return Err(ConfigError::ValidationError(format!(
                "thresholds must descend (suicidal > hard > balanced > easy), got {:?}",
                bounds
            )));
        }
        Ok(())
    }
}
