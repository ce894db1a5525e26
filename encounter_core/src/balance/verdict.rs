use super::totals::SideTotals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty of a matchup from the party's point of view, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Balanced,
    Hard,
    Suicidal,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::VeryEasy => write!(f, "Very Easy"),
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Balanced => write!(f, "Balanced"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Suicidal => write!(f, "Suicidal"),
        }
    }
}

/// Outcome of a balance evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyVerdict {
    pub difficulty: Difficulty,
    /// Opponent pressure on the party minus party pressure on the opponents
    pub differential: f64,
    pub party: SideTotals,
    pub opposition: SideTotals,
    /// Party share of the power bar, in [0, 100]
    pub party_share_percent: f64,
    /// Opposition share of the power bar, `100 - party_share_percent`
    pub opposition_share_percent: f64,
}

impl DifficultyVerdict {
    /// Report shown to the game master
    pub fn summary(&self) -> String {
        format!(
            "{}\nParty: {} HP / {} max damage\nOpponents: {} HP / {} max damage",
            self.difficulty,
            self.party.total_hp,
            self.party.total_max_damage,
            self.opposition.total_hp,
            self.opposition.total_max_damage,
        )
    }

    /// Render the power shares as a bar `width` cells wide
    ///
    /// Party cells are drawn with `#`, opposition cells with `-`.
    pub fn power_bar(&self, width: usize) -> String {
        let party_cells = ((self.party_share_percent / 100.0) * width as f64).round() as usize;
        let party_cells = party_cells.min(width);
        format!("{}{}", "#".repeat(party_cells), "-".repeat(width - party_cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(party_share: f64) -> DifficultyVerdict {
        DifficultyVerdict {
            difficulty: Difficulty::Balanced,
            differential: 0.0,
            party: SideTotals::new(30.0, 15.0),
            opposition: SideTotals::new(28.0, 12.0),
            party_share_percent: party_share,
            opposition_share_percent: 100.0 - party_share,
        }
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::VeryEasy < Difficulty::Easy);
        assert!(Difficulty::Hard < Difficulty::Suicidal);
        assert!(Difficulty::Balanced > Difficulty::Easy);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            verdict(50.0).summary(),
            "Balanced\nParty: 30 HP / 15 max damage\nOpponents: 28 HP / 12 max damage"
        );
    }

    #[test]
    fn test_power_bar() {
        assert_eq!(verdict(50.0).power_bar(10), "#####-----");
        assert_eq!(verdict(100.0).power_bar(4), "####");
        assert_eq!(verdict(0.0).power_bar(4), "----");
    }
}
