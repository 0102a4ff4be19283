//! Stealth and sight.
//!
//! All creatures see in bright light. Low-light vision extends sight into
//! dim light; darkvision works in any light.

use crate::error::RulesError;
use crate::types::{LightCondition, VisionType};

/// A creature is hidden when it is hiding and the observer is not aware of it.
pub fn is_hidden(hiding: bool, aware: bool) -> bool {
    hiding && !aware
}

/// Whether a creature with `vision` can see in `light`.
pub fn can_see(light: LightCondition, vision: VisionType) -> bool {
    matches!(
        (light, vision),
        (LightCondition::Bright, _)
            | (_, VisionType::Dark)
            | (LightCondition::Dim, VisionType::LowLight)
    )
}

/// Like [`can_see`], for light and vision given by name.
///
/// # Errors
///
/// Returns [`RulesError::InvalidLight`] or [`RulesError::InvalidVision`]
/// when either name is unknown. Light is checked first.
pub fn can_see_in(light: &str, vision: &str) -> Result<bool, RulesError> {
    let light: LightCondition = light.parse()?;
    let vision: VisionType = vision.parse()?;
    Ok(can_see(light, vision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_only_when_hiding_unnoticed() {
        assert!(is_hidden(true, false));
        assert!(!is_hidden(true, true));
        assert!(!is_hidden(false, false));
        assert!(!is_hidden(false, true));
    }

    #[test]
    fn sight_examples() {
        assert!(can_see(LightCondition::Bright, VisionType::Average));
        assert!(!can_see(LightCondition::Dark, VisionType::Average));
        assert!(can_see(LightCondition::Dim, VisionType::LowLight));
        assert!(can_see(LightCondition::Dark, VisionType::Dark));
    }

    #[test]
    fn sight_table() {
        use LightCondition::*;

        let cases = [
            (Bright, VisionType::Average, true),
            (Bright, VisionType::LowLight, true),
            (Bright, VisionType::Dark, true),
            (Dim, VisionType::Average, false),
            (Dim, VisionType::LowLight, true),
            (Dim, VisionType::Dark, true),
            (Dark, VisionType::Average, false),
            (Dark, VisionType::LowLight, false),
            (Dark, VisionType::Dark, true),
        ];
        for (light, vision, expected) in cases {
            assert_eq!(can_see(light, vision), expected, "{light} / {vision}");
        }
    }

    #[test]
    fn sight_by_name() {
        assert_eq!(can_see_in("dim", "low-light"), Ok(true));
        assert_eq!(can_see_in("dark", "average"), Ok(false));
        assert_eq!(
            can_see_in("twilight", "average"),
            Err(RulesError::InvalidLight("twilight".to_string()))
        );
        assert_eq!(
            can_see_in("dim", "blindsight"),
            Err(RulesError::InvalidVision("blindsight".to_string()))
        );
    }
}
