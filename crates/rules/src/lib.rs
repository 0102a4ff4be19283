//! # Tabletop Rules
//!
//! Stateless rule evaluation for tabletop role-playing mechanics: strikes,
//! cover, healing, damage thresholds, proficiency, stealth, sight and
//! spellcasting.
//!
//! ```
//! use tabletop_rules::{can_see, strike_damage, LightCondition, VisionType};
//!
//! assert_eq!(strike_damage(25, 15, 6), 12);
//! assert!(can_see(LightCondition::Dim, VisionType::LowLight));
//! ```

pub mod error;
pub mod rules;
pub mod types;

pub use error::RulesError;

// Re-export rule functions and their outcome types
pub use rules::{
    can_cast_spell, can_see, can_see_in, cover_bonus, does_strike_crit, does_strike_hit, heal,
    is_hidden, proficiency_bonus, proficiency_bonus_for, remaining_hp, resolve_damage,
    resolve_strike, strike_damage, CoverLevel, DamageOutcome, StrikeOutcome,
    CRITICAL_DAMAGE_MULTIPLIER, CRITICAL_HIT_MARGIN, GREATER_COVER_BONUS, INSTANT_DEATH_HP,
    INSTANT_DEATH_MULTIPLIER, STANDARD_COVER_BONUS,
};

// Re-export vocabulary types
pub use types::{LightCondition, ProficiencyRank, VisionType};
