//! Prelude module for convenient imports
//!
//! ```rust
//! use encounter_core::prelude::*;
//! ```

// Inputs
pub use crate::combatant::CombatantSummary;
pub use crate::damage::DamageExpression;

// Evaluation
pub use crate::balance::{evaluate, evaluate_totals, evaluate_with, Difficulty, DifficultyVerdict, SideTotals};

// Config
pub use crate::config::{BalanceConstants, Thresholds};

// Errors
pub use crate::{ParseError, Side, ValidationError};

// Re-exports from bestiary_core
pub use bestiary_core::{EntityKind, EntityRecord, EntitySource};
