//! Proficiency rank enumeration
//!
//! Ranks are ordered from least to most skilled; each adds a fixed bonus on
//! top of the character's level.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tiered skill mastery that determines the proficiency bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ProficiencyRank {
    /// No training (+0 + level)
    Untrained,
    /// Basic training (+2 + level)
    Trained,
    /// Advanced training (+4 + level)
    Expert,
    /// Mastery (+6 + level)
    Master,
    /// Ultimate mastery (+8 + level)
    Legendary,
}

impl ProficiencyRank {
    /// All ranks in ascending order.
    pub const ALL: [ProficiencyRank; 5] = [
        ProficiencyRank::Untrained,
        ProficiencyRank::Trained,
        ProficiencyRank::Expert,
        ProficiencyRank::Master,
        ProficiencyRank::Legendary,
    ];

    /// Get the rank bonus (before adding level).
    pub fn rank_bonus(&self) -> i32 {
        match self {
            ProficiencyRank::Untrained => 0,
            ProficiencyRank::Trained => 2,
            ProficiencyRank::Expert => 4,
            ProficiencyRank::Master => 6,
            ProficiencyRank::Legendary => 8,
        }
    }

    /// Wire name, as accepted by `FromStr` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyRank::Untrained => "untrained",
            ProficiencyRank::Trained => "trained",
            ProficiencyRank::Expert => "expert",
            ProficiencyRank::Master => "master",
            ProficiencyRank::Legendary => "legendary",
        }
    }
}

impl fmt::Display for ProficiencyRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProficiencyRank {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "untrained" => Ok(ProficiencyRank::Untrained),
            "trained" => Ok(ProficiencyRank::Trained),
            "expert" => Ok(ProficiencyRank::Expert),
            "master" => Ok(ProficiencyRank::Master),
            "legendary" => Ok(ProficiencyRank::Legendary),
            _ => {
                tracing::debug!(rank = s, "Rejected unknown proficiency rank");
                Err(RulesError::invalid_rank(s))
            }
        }
    }
}

impl TryFrom<String> for ProficiencyRank {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
