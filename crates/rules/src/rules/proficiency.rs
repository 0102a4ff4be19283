//! Proficiency bonus: character level plus a rank bonus.
//!
//! | Rank       | Bonus     |
//! | ---        | ---       |
//! | untrained  | level + 0 |
//! | trained    | level + 2 |
//! | expert     | level + 4 |
//! | master     | level + 6 |
//! | legendary  | level + 8 |

use crate::error::RulesError;
use crate::types::ProficiencyRank;

/// Proficiency bonus for a character of `level` at `rank`.
pub fn proficiency_bonus(level: i32, rank: ProficiencyRank) -> i32 {
    level.saturating_add(rank.rank_bonus())
}

/// Like [`proficiency_bonus`], for a rank given by name.
///
/// # Errors
///
/// Returns [`RulesError::InvalidRank`] if `rank` is not a known rank name.
pub fn proficiency_bonus_for(level: i32, rank: &str) -> Result<i32, RulesError> {
    let rank: ProficiencyRank = rank.parse()?;
    Ok(proficiency_bonus(level, rank))
}
