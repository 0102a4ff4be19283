//! Rule functions.
//!
//! Every function here is pure: it reads only its arguments and has no side
//! effects beyond trace-level logging. Functions may be called from any
//! thread without synchronization.
//!
//! # Modules
//!
//! - Combat: strike hit/crit/damage and cover (`combat`)
//! - Health: healing and damage thresholds (`health`)
//! - Proficiency: level + rank bonus (`proficiency`)
//! - Senses: stealth and sight (`senses`)
//! - Spellcasting: casting eligibility (`spellcasting`)

mod combat;
mod health;
mod proficiency;
mod senses;
mod spellcasting;

pub use combat::{
    cover_bonus, does_strike_crit, does_strike_hit, resolve_strike, strike_damage, CoverLevel,
    StrikeOutcome, CRITICAL_DAMAGE_MULTIPLIER, CRITICAL_HIT_MARGIN, GREATER_COVER_BONUS,
    STANDARD_COVER_BONUS,
};
pub use health::{
    heal, remaining_hp, resolve_damage, DamageOutcome, INSTANT_DEATH_HP, INSTANT_DEATH_MULTIPLIER,
};
pub use proficiency::{proficiency_bonus, proficiency_bonus_for};
pub use senses::{can_see, can_see_in, is_hidden};
pub use spellcasting::can_cast_spell;
