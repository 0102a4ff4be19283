//! Spellcasting eligibility.

/// A spell can be cast only when it is prepared and a scroll of it is on hand.
pub fn can_cast_spell(is_spell_prepared: bool, has_scroll: bool) -> bool {
    is_spell_prepared && has_scroll
}
