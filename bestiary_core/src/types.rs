use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A player character
    Character,
    /// A monster from the compendium
    #[default]
    Monster,
}

impl EntityKind {
    /// Damage text assumed when a record carries none
    ///
    /// Characters default to an armed human (`1d6+2`), monsters to a bare `1d6`.
    pub fn default_damage_text(&self) -> &'static str {
        match self {
            EntityKind::Character => "1d6+2",
            EntityKind::Monster => "1d6",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Character => write!(f, "Character"),
            EntityKind::Monster => write!(f, "Monster"),
        }
    }
}

/// Prefix substitution for token image paths
///
/// Compendium entries created by older releases still point at the old asset
/// root; placing them rewrites the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRewrite {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl ImageRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        ImageRewrite {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Apply the rewrite to the first occurrence of `from` in the path
    pub fn apply(&self, path: &str) -> String {
        if self.from.is_empty() {
            return path.to_string();
        }
        path.replacen(&self.from, &self.to, 1)
    }
}

/// Largest number of copies of one entity a single selection may ask for
pub const MAX_COUNT: u32 = 100;

/// Parse a quantity typed into a count field
///
/// Reads the leading integer the way a lenient form field would: surrounding
/// text after the digits is ignored. Missing, non-numeric, zero or negative
/// input yields 1; anything above [`MAX_COUNT`] is capped.
pub fn parse_count(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return 1;
    };

    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if negative || digits.is_empty() {
        return 1;
    }

    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n.min(MAX_COUNT),
        // Digits only, so the sole failure is overflow
        Err(_) => MAX_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_damage_text() {
        assert_eq!(EntityKind::Character.default_damage_text(), "1d6+2");
        assert_eq!(EntityKind::Monster.default_damage_text(), "1d6");
    }

    #[test]
    fn test_image_rewrite() {
        let rewrite = ImageRewrite::new("systems/old/", "systems/new/");
        assert_eq!(
            rewrite.apply("systems/old/tokens/wolf.webp"),
            "systems/new/tokens/wolf.webp"
        );
        assert_eq!(rewrite.apply("icons/wolf.webp"), "icons/wolf.webp");
    }

    #[test]
    fn test_image_rewrite_empty_is_noop() {
        let rewrite = ImageRewrite::default();
        assert_eq!(rewrite.apply("systems/old/a.png"), "systems/old/a.png");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("3")), 3);
        assert_eq!(parse_count(Some("  12 goblins")), 12);
        assert_eq!(parse_count(Some("+4")), 4);
    }

    #[test]
    fn test_parse_count_fallbacks() {
        assert_eq!(parse_count(None), 1);
        assert_eq!(parse_count(Some("")), 1);
        assert_eq!(parse_count(Some("many")), 1);
        assert_eq!(parse_count(Some("0")), 1);
        assert_eq!(parse_count(Some("-3")), 1);
    }

    #[test]
    fn test_parse_count_caps_large_counts() {
        assert_eq!(parse_count(Some("100")), MAX_COUNT);
        assert_eq!(parse_count(Some("250")), MAX_COUNT);
        assert_eq!(parse_count(Some("99999999999")), MAX_COUNT);
    }
}
