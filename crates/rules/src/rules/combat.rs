//! Strike resolution and cover.
//!
//! A strike is compared against the target's armor class (AC):
//! - Meet or beat AC: hit
//! - Beat AC by 10 or more: critical hit, dealing double damage
//! - Below AC: miss, dealing nothing

use serde::{Deserialize, Serialize};

/// How far an attack must exceed AC to become a critical hit.
pub const CRITICAL_HIT_MARGIN: i32 = 10;

/// Damage multiplier applied on a critical hit.
pub const CRITICAL_DAMAGE_MULTIPLIER: i32 = 2;

/// AC bonus when behind an obstacle.
pub const STANDARD_COVER_BONUS: i32 = 2;

/// AC bonus when behind an obstacle and actively taking cover.
pub const GREATER_COVER_BONUS: i32 = 4;

/// Result of a single strike against an AC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeOutcome {
    /// Attack below AC
    Miss,
    /// Attack meets or beats AC
    Hit,
    /// Attack beats AC by the critical margin
    CriticalHit,
}

impl StrikeOutcome {
    /// True for a hit or a critical hit.
    pub fn is_hit(&self) -> bool {
        !matches!(self, StrikeOutcome::Miss)
    }

    /// Damage dealt by this outcome given the strike's normal damage.
    pub fn damage_dealt(&self, damage: i32) -> i32 {
        match self {
            StrikeOutcome::Miss => 0,
            StrikeOutcome::Hit => damage,
            StrikeOutcome::CriticalHit => damage.saturating_mul(CRITICAL_DAMAGE_MULTIPLIER),
        }
    }
}

/// Whether an attack value meets or beats the target's AC.
pub fn does_strike_hit(attack: i32, ac: i32) -> bool {
    attack >= ac
}

/// Whether an attack value beats the target's AC by at least [`CRITICAL_HIT_MARGIN`].
pub fn does_strike_crit(attack: i32, ac: i32) -> bool {
    i64::from(attack) >= i64::from(ac) + i64::from(CRITICAL_HIT_MARGIN)
}

/// Classify a strike. A critical hit is always also a hit.
pub fn resolve_strike(attack: i32, ac: i32) -> StrikeOutcome {
    let outcome = if !does_strike_hit(attack, ac) {
        StrikeOutcome::Miss
    } else if does_strike_crit(attack, ac) {
        StrikeOutcome::CriticalHit
    } else {
        StrikeOutcome::Hit
    };

    tracing::trace!(attack, ac, outcome = ?outcome, "Resolved strike");
    outcome
}

/// Damage a strike deals: 0 on a miss, `damage` on a hit, double on a critical hit.
pub fn strike_damage(attack: i32, ac: i32, damage: i32) -> i32 {
    resolve_strike(attack, ac).damage_dealt(damage)
}

/// Cover tier a creature has against incoming strikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverLevel {
    /// Not behind an obstacle
    #[default]
    None,
    /// Behind an obstacle
    Standard,
    /// Behind an obstacle and actively taking cover
    Greater,
}

impl CoverLevel {
    /// Taking cover only counts when there is an obstacle to hide behind.
    pub fn from_position(behind_obstacle: bool, taking_cover: bool) -> Self {
        match (behind_obstacle, taking_cover) {
            (false, _) => CoverLevel::None,
            (true, false) => CoverLevel::Standard,
            (true, true) => CoverLevel::Greater,
        }
    }

    /// AC bonus granted by this cover tier.
    pub fn ac_bonus(&self) -> i32 {
        match self {
            CoverLevel::None => 0,
            CoverLevel::Standard => STANDARD_COVER_BONUS,
            CoverLevel::Greater => GREATER_COVER_BONUS,
        }
    }
}

/// AC bonus from cover: 0 in the open, 2 behind an obstacle, 4 when also taking cover.
pub fn cover_bonus(behind_obstacle: bool, taking_cover: bool) -> i32 {
    CoverLevel::from_position(behind_obstacle, taking_cover).ac_bonus()
}
