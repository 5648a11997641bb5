//! Position categories used by the position catalog.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a position code.
///
/// Stored in the `positions` table using the short codes `INF`, `OF`,
/// `BENCH`, `OUT` and `OTHER`.
///
/// # Examples
///
/// ```rust
/// use lineup_stats::PositionCategory;
///
/// let category: PositionCategory = "inf".parse().unwrap();
/// assert_eq!(category, PositionCategory::Infield);
/// assert_eq!(category.to_string(), "INF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    #[serde(rename = "INF")]
    Infield,
    #[serde(rename = "OF")]
    Outfield,
    #[serde(rename = "BENCH")]
    Bench,
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "OTHER")]
    Other,
}

impl PositionCategory {
    /// Short code used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCategory::Infield => "INF",
            PositionCategory::Outfield => "OF",
            PositionCategory::Bench => "BENCH",
            PositionCategory::Out => "OUT",
            PositionCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PositionCategory {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INF" | "INFIELD" => Ok(PositionCategory::Infield),
            "OF" | "OUTFIELD" => Ok(PositionCategory::Outfield),
            "BENCH" => Ok(PositionCategory::Bench),
            "OUT" => Ok(PositionCategory::Out),
            "OTHER" => Ok(PositionCategory::Other),
            _ => Err(LineupError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("INF".parse::<PositionCategory>().unwrap(), PositionCategory::Infield);
        assert_eq!("inf".parse::<PositionCategory>().unwrap(), PositionCategory::Infield);
        assert_eq!("Infield".parse::<PositionCategory>().unwrap(), PositionCategory::Infield);
        assert_eq!("of".parse::<PositionCategory>().unwrap(), PositionCategory::Outfield);
        assert_eq!("OUTFIELD".parse::<PositionCategory>().unwrap(), PositionCategory::Outfield);
        assert_eq!("bench".parse::<PositionCategory>().unwrap(), PositionCategory::Bench);
        assert_eq!("Out".parse::<PositionCategory>().unwrap(), PositionCategory::Out);
        assert_eq!("other".parse::<PositionCategory>().unwrap(), PositionCategory::Other);
    }

    #[test]
    fn test_unknown_category() {
        match "MIDFIELD".parse::<PositionCategory>() {
            Err(LineupError::InvalidCategory { category }) => assert_eq!(category, "MIDFIELD"),
            other => panic!("Expected InvalidCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for category in [
            PositionCategory::Infield,
            PositionCategory::Outfield,
            PositionCategory::Bench,
            PositionCategory::Out,
            PositionCategory::Other,
        ] {
            assert_eq!(category.to_string().parse::<PositionCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&PositionCategory::Outfield).unwrap(), "\"OF\"");
        let parsed: PositionCategory = serde_json::from_str("\"INF\"").unwrap();
        assert_eq!(parsed, PositionCategory::Infield);
    }
}
