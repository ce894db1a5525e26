//! placement_core - Batch token placement
//!
//! Turns a list of (template, count) requests into a deterministic grid of
//! labelled placements, then hands the resolved tokens to a [`SceneSink`].
//! Planning is pure; only [`deploy`] talks to the outside world.

mod config;
mod plan;
mod request;
mod spawn;

pub use config::{LayoutConfig, PlacementConfig};
pub use plan::{plan, Placement, PlacementPlan};
pub use request::{prepare_requests, PlacementRequest};
pub use spawn::{deploy, DeployReport, Disposition, SceneSink, TokenSpawn};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading placement configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {error}")]
    Validation {
        error: ConfigurationError,
        path: PathBuf,
    },
}

/// Layout that cannot produce a grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),
    #[error("At least one placement per row is required")]
    ZeroPerRow,
}

/// Error handing tokens to the scene
#[derive(Debug, Error)]
pub enum DeployError<E: std::error::Error + 'static> {
    #[error("Scene rejected token '{name}': {source}")]
    Sink {
        name: String,
        #[source]
        source: E,
    },
}
