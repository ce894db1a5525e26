//! Balance evaluation - compare two sides and classify the matchup
//!
//! Each side's expected damage is a fixed share of its theoretical max
//! (half, by default). The pressure one side puts on the other is how many
//! "rounds" of that damage the other side can absorb:
//!
//! - opponent pressure = opposition HP / party effective damage
//! - party pressure = party HP / opposition effective damage
//! - differential = opponent pressure - party pressure
//!
//! A zero effective damage, and a zero pressure, both read as 1.

use super::totals::SideTotals;
use super::verdict::DifficultyVerdict;
use crate::combatant::CombatantSummary;
use crate::config::BalanceConstants;
use crate::{Side, ValidationError};
use tracing::debug;

/// Evaluate a matchup with the default constants
pub fn evaluate(
    party: &[CombatantSummary],
    opposition: &[CombatantSummary],
) -> Result<DifficultyVerdict, ValidationError> {
    evaluate_with(party, opposition, &BalanceConstants::default())
}

/// Evaluate a matchup with explicit constants
///
/// Both sides must have at least one combatant.
pub fn evaluate_with(
    party: &[CombatantSummary],
    opposition: &[CombatantSummary],
    constants: &BalanceConstants,
) -> Result<DifficultyVerdict, ValidationError> {
    if party.is_empty() {
        return Err(ValidationError::EmptySide(Side::Party));
    }
    if opposition.is_empty() {
        return Err(ValidationError::EmptySide(Side::Opposition));
    }

    Ok(evaluate_totals(
        SideTotals::aggregate(party),
        SideTotals::aggregate(opposition),
        constants,
    ))
}

/// Classify already-aggregated side totals
pub fn evaluate_totals(
    party: SideTotals,
    opposition: SideTotals,
    constants: &BalanceConstants,
) -> DifficultyVerdict {
    let efficiency = constants.damage_efficiency;
    let party_effective = party.effective_damage(efficiency);
    let opposition_effective = opposition.effective_damage(efficiency);

    let opponent_pressure = or_one(opposition.total_hp / or_one(party_effective));
    let party_pressure = or_one(party.total_hp / or_one(opposition_effective));
    let differential = opponent_pressure - party_pressure;

    let difficulty = constants.thresholds.classify(differential);

    let (party_share_percent, opposition_share_percent) =
        power_shares(party.power(efficiency), opposition.power(efficiency));

    debug!(
        party_hp = party.total_hp,
        party_max_damage = party.total_max_damage,
        opposition_hp = opposition.total_hp,
        opposition_max_damage = opposition.total_max_damage,
        differential,
        %difficulty,
        "evaluated encounter"
    );

    DifficultyVerdict {
        difficulty,
        differential,
        party,
        opposition,
        party_share_percent,
        opposition_share_percent,
    }
}

/// Zero (or NaN) reads as 1
fn or_one(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        1.0
    } else {
        value
    }
}

/// Split the power bar between the two sides; no power at all splits evenly
fn power_shares(party_power: f64, opposition_power: f64) -> (f64, f64) {
    let total = party_power + opposition_power;
    if !(total.is_finite() && total > 0.0) {
        return (50.0, 50.0);
    }
    let party_share = (100.0 * party_power / total).clamp(0.0, 100.0);
    (party_share, 100.0 - party_share)
}
