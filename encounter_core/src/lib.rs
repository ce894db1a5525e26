//! encounter_core - Encounter balance evaluation
//!
//! This library provides:
//! - DamageExpression: Parsed dice damage ("2d6+3") and its maximum roll
//! - CombatantSummary: One selected side-member (HP, damage, count)
//! - evaluate: Aggregates two sides and classifies the matchup into a Difficulty
//! - BalanceConstants: Tunable thresholds, loadable from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use encounter_core::prelude::*;
//!
//! let party = vec![
//!     CombatantSummary::single(30.0, DamageExpression::parse(Some("1d8+2"))),
//!     CombatantSummary::single(22.0, DamageExpression::parse(Some("2d4"))),
//! ];
//! let goblins = vec![CombatantSummary::new(7.0, DamageExpression::parse(Some("1d6")), 4)];
//!
//! let verdict = evaluate(&party, &goblins).unwrap();
//! println!("{}", verdict.summary());
//! ```

pub mod balance;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod prelude;

// Core API - what most users need
pub use balance::{evaluate, evaluate_totals, evaluate_with, Difficulty, DifficultyVerdict, SideTotals};
pub use combatant::CombatantSummary;
pub use damage::DamageExpression;

// Configuration
pub use config::{BalanceConstants, ConfigError, Thresholds};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the two opposing groups in a balance evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Party,
    Opposition,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Party => write!(f, "party"),
            Side::Opposition => write!(f, "opposition"),
        }
    }
}

/// Error parsing damage text in strict mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty damage text")]
    Empty,
    #[error("No dice expression in '{0}'")]
    NoMatch(String),
}

/// Error rejecting the inputs of a balance evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No combatant selected for the {0}")]
    EmptySide(Side),
}
