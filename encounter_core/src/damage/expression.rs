//! Dice damage expressions
//!
//! Damage is written informally as `NdS` or `NdS+B` ("2d6+3"), often inside
//! longer text copied from a weapon description. Balance only ever looks at
//! the maximum roll: `N * S + B`.

use crate::ParseError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static DICE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn dice_pattern() -> &'static Regex {
    DICE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+)d(\d+)(?:\+(\d+))?").expect("dice pattern is a valid regex")
    })
}

const DEFAULT_DICE_COUNT: u32 = 1;
const DEFAULT_DICE_SIDES: u32 = 6;

/// A parsed `NdS+B` damage expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DamageExpression {
    dice_count: u32,
    dice_sides: u32,
    bonus: u32,
}

impl Default for DamageExpression {
    /// `1d6`
    fn default() -> Self {
        DamageExpression {
            dice_count: DEFAULT_DICE_COUNT,
            dice_sides: DEFAULT_DICE_SIDES,
            bonus: 0,
        }
    }
}

impl DamageExpression {
    /// Create an expression; dice count and die size are floored at 1
    pub fn new(dice_count: u32, dice_sides: u32, bonus: u32) -> Self {
        DamageExpression {
            dice_count: dice_count.max(1),
            dice_sides: dice_sides.max(1),
            bonus,
        }
    }

    /// Parse damage text, falling back to `1d6` when nothing matches
    ///
    /// Never fails: absent or malformed text yields the default expression.
    pub fn parse(text: Option<&str>) -> Self {
        text.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    /// Parse damage text, substituting `default_text` when none was supplied
    ///
    /// Only absent or blank text is substituted. Text that is present but
    /// malformed still falls back to `1d6`, whatever the default.
    pub fn parse_or(text: Option<&str>, default_text: &str) -> Self {
        match text.map(str::trim) {
            Some(t) if !t.is_empty() => Self::parse(Some(t)),
            _ => Self::parse(Some(default_text)),
        }
    }

    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn dice_sides(&self) -> u32 {
        self.dice_sides
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Highest possible roll: every die at its maximum, plus the bonus
    pub fn max_damage(&self) -> u64 {
        self.dice_count as u64 * self.dice_sides as u64 + self.bonus as u64
    }
}

impl FromStr for DamageExpression {
    type Err = ParseError;

    /// Strict parse: fails when the text holds no dice expression
    ///
    /// A zero (or unrepresentable) dice count reads as 1 and a zero die size
    /// as 6; a missing or unrepresentable bonus reads as 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let caps = dice_pattern()
            .captures(s)
            .ok_or_else(|| ParseError::NoMatch(s.to_string()))?;

        let field = |idx: usize| {
            caps.get(idx)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .filter(|&n| n > 0)
        };

        Ok(DamageExpression {
            dice_count: field(1).unwrap_or(DEFAULT_DICE_COUNT),
            dice_sides: field(2).unwrap_or(DEFAULT_DICE_SIDES),
            bonus: field(3).unwrap_or(0),
        })
    }
}

impl fmt::Display for DamageExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.dice_sides)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        }
        Ok(())
    }
}
