//! bestiary_core - Entity catalog for encounter planning
//!
//! Holds the records a game master picks from when building an encounter:
//! player characters and monsters, each with hit points, a damage text and
//! a token image. Everything downstream (balance evaluation, token placement)
//! reads entities through the [`EntitySource`] trait.

mod config;
mod record;
mod registry;
mod source;
pub mod types;

pub use record::EntityRecord;
pub use registry::Bestiary;
pub use source::EntitySource;
pub use types::{parse_count, EntityKind, ImageRewrite, MAX_COUNT};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading the bestiary catalog from its TOML files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading catalog '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Catalog parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Invalid catalog entry in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}
