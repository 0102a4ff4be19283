//! Hit point rules: healing and taking damage.

use serde::{Deserialize, Serialize};

/// Damage of at least this multiple of max HP kills outright.
pub const INSTANT_DEATH_MULTIPLIER: i32 = 2;

/// Sentinel HP reported for a creature killed outright.
pub const INSTANT_DEATH_HP: i32 = -1;

/// HP restored by healing, capped at `max_hp`.
pub fn heal(max_hp: i32, current_hp: i32, heal_amount: i32) -> i32 {
    current_hp.saturating_add(heal_amount).min(max_hp)
}

/// What taking a hit does to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DamageOutcome {
    /// Damage reached double max HP
    InstantDeath,
    /// HP dropped to 0 or below
    Dying,
    /// Still standing with this much HP
    Wounded { remaining: i32 },
}

impl DamageOutcome {
    /// Integer form: [`INSTANT_DEATH_HP`], 0, or the remaining HP.
    pub fn remaining_hp(&self) -> i32 {
        match self {
            DamageOutcome::InstantDeath => INSTANT_DEATH_HP,
            DamageOutcome::Dying => 0,
            DamageOutcome::Wounded { remaining } => *remaining,
        }
    }

    /// True only for instant death.
    pub fn is_dead(&self) -> bool {
        matches!(self, DamageOutcome::InstantDeath)
    }
}

/// Apply damage to a creature. Instant death is checked before HP drops to 0.
pub fn resolve_damage(max_hp: i32, current_hp: i32, damage: i32) -> DamageOutcome {
    let remaining = current_hp.saturating_sub(damage);
    let death_threshold = i64::from(max_hp) * i64::from(INSTANT_DEATH_MULTIPLIER);
    let outcome = if i64::from(damage) >= death_threshold {
        DamageOutcome::InstantDeath
    } else if remaining <= 0 {
        DamageOutcome::Dying
    } else {
        DamageOutcome::Wounded { remaining }
    };

    tracing::trace!(max_hp, current_hp, damage, outcome = ?outcome, "Resolved damage");
    outcome
}

/// HP left after taking damage: -1 on instant death, otherwise never below 0.
pub fn remaining_hp(max_hp: i32, current_hp: i32, damage: i32) -> i32 {
    resolve_damage(max_hp, current_hp, damage).remaining_hp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_caps_at_max() {
        assert_eq!(heal(20, 15, 10), 20);
        assert_eq!(heal(20, 5, 10), 15);
        assert_eq!(heal(20, 10, 10), 20);
        assert_eq!(heal(20, 20, 0), 20);
    }

    #[test]
    fn heal_never_exceeds_max() {
        for current in 0..=20 {
            for amount in 0..=30 {
                assert!(heal(20, current, amount) <= 20);
            }
        }
        assert_eq!(heal(20, i32::MAX, i32::MAX), 20);
    }

    #[test]
    fn massive_damage_kills_outright() {
        assert_eq!(remaining_hp(10, 10, 20), -1);
        assert_eq!(remaining_hp(10, 10, 25), INSTANT_DEATH_HP);
        assert!(resolve_damage(10, 10, 20).is_dead());
    }

    #[test]
    fn damage_floors_at_zero() {
        assert_eq!(remaining_hp(10, 5, 5), 0);
        assert_eq!(remaining_hp(10, 5, 19), 0);
        assert_eq!(resolve_damage(10, 5, 19), DamageOutcome::Dying);
    }

    #[test]
    fn damage_reduces_hp() {
        assert_eq!(remaining_hp(10, 8, 3), 5);
        assert_eq!(
            resolve_damage(10, 8, 3),
            DamageOutcome::Wounded { remaining: 5 }
        );
    }

    #[test]
    fn instant_death_checked_before_zero_floor() {
        // current HP already at 0, but the hit is large enough to kill outright
        assert_eq!(remaining_hp(10, 0, 20), -1);
        assert_eq!(remaining_hp(10, 0, 19), 0);
    }

    #[test]
    fn death_threshold_holds_above_i32_range() {
        // 2 * 2^30 does not fit in i32, so i32::MAX damage stays below it
        assert_eq!(remaining_hp(1 << 30, 10, i32::MAX), 0);
        assert_eq!(remaining_hp(i32::MAX, i32::MAX, i32::MAX), 0);
        assert_eq!(remaining_hp((1 << 30) - 1, 10, i32::MAX), INSTANT_DEATH_HP);
    }

    #[test]
    fn damage_outcome_serializes_tagged() {
        let json = serde_json::to_value(DamageOutcome::Wounded { remaining: 5 }).expect("serialize");
        assert_eq!(json, serde_json::json!({ "outcome": "wounded", "remaining": 5 }));
    }
}
