use crate::combatant::CombatantSummary;
use serde::Serialize;

/// Aggregated HP and max damage of one side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SideTotals {
    pub total_hp: f64,
    pub total_max_damage: f64,
}

impl SideTotals {
    pub fn new(total_hp: f64, total_max_damage: f64) -> Self {
        SideTotals {
            total_hp,
            total_max_damage,
        }
    }

    /// Sum HP and max damage over a side, each scaled by its count
    pub fn aggregate(summaries: &[CombatantSummary]) -> Self {
        summaries.iter().fold(SideTotals::default(), |acc, s| SideTotals {
            total_hp: acc.total_hp + s.total_hit_points(),
            total_max_damage: acc.total_max_damage + s.total_max_damage(),
        })
    }

    /// Damage the side is expected to land, before any zero floor
    pub fn effective_damage(&self, efficiency: f64) -> f64 {
        self.total_max_damage * efficiency
    }

    /// Display power: effective damage plus HP
    pub fn power(&self, efficiency: f64) -> f64 {
        self.effective_damage(efficiency) + self.total_hp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageExpression;

    #[test]
    fn test_aggregate() {
        let side = vec![
            CombatantSummary::single(30.0, DamageExpression::new(1, 8, 2)),
            CombatantSummary::new(7.0, DamageExpression::new(1, 6, 0), 3),
        ];
        let totals = SideTotals::aggregate(&side);
        assert!((totals.total_hp - 51.0).abs() < f64::EPSILON);
        assert!((totals.total_max_damage - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(SideTotals::aggregate(&[]), SideTotals::default());
    }

    #[test]
    fn test_effective_damage_and_power() {
        let totals = SideTotals::new(40.0, 15.0);
        assert!((totals.effective_damage(0.5) - 7.5).abs() < f64::EPSILON);
        assert!((totals.power(0.5) - 47.5).abs() < f64::EPSILON);
    }
}
