//! Combatant summaries - one selected side-member

use crate::damage::DamageExpression;
use bestiary_core::EntityRecord;
use serde::Serialize;

/// A selected side-member: hit points, damage, and how many of them there are
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombatantSummary {
    pub hit_points: f64,
    pub damage: DamageExpression,
    pub count: u32,
}

impl CombatantSummary {
    /// Create a summary; negative HP reads as 0 and count is floored at 1
    pub fn new(hit_points: f64, damage: DamageExpression, count: u32) -> Self {
        CombatantSummary {
            hit_points: hit_points.max(0.0),
            damage,
            count: count.max(1),
        }
    }

    /// A single combatant, e.g. a player character
    pub fn single(hit_points: f64, damage: DamageExpression) -> Self {
        Self::new(hit_points, damage, 1)
    }

    /// Build a summary from a catalog record
    ///
    /// Missing damage text falls back to the default for the record's kind.
    pub fn from_record(record: &EntityRecord, count: u32) -> Self {
        let damage = DamageExpression::parse_or(
            record.damage_text.as_deref(),
            record.kind.default_damage_text(),
        );
        Self::new(record.effective_hit_points(), damage, count)
    }

    /// HP contributed to the side total
    pub fn total_hit_points(&self) -> f64 {
        self.hit_points * self.count as f64
    }

    /// Max damage contributed to the side total
    pub fn total_max_damage(&self) -> f64 {
        self.damage.max_damage() as f64 * self.count as f64
    }
}
