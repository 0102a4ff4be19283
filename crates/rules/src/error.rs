//! Error types for the rules library
//!
//! Every rule function is total over its typed inputs. The only failures are
//! at the string boundary, where a rank, light condition or vision type does
//! not name a known variant.

use thiserror::Error;

/// Error returned when a free-form string cannot be mapped onto a rule enum
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Proficiency rank is not one of untrained/trained/expert/master/legendary
    #[error("Invalid proficiency rank: {0}")]
    InvalidRank(String),

    /// Light condition is not one of bright/dim/dark
    #[error("Invalid light condition: {0}")]
    InvalidLight(String),

    /// Vision type is not one of average/low-light/dark
    #[error("Invalid vision type: {0}")]
    InvalidVision(String),
}

impl RulesError {
    /// Creates an invalid rank error.
    ///
    /// Use this in `FromStr` for [`crate::ProficiencyRank`] when the input
    /// doesn't match any rank name.
    ///
    /// # Example
    /// ```
    /// use tabletop_rules::RulesError;
    ///
    /// let err = RulesError::invalid_rank("grandmaster");
    /// assert_eq!(err.to_string(), "Invalid proficiency rank: grandmaster");
    /// ```
    pub fn invalid_rank(value: impl Into<String>) -> Self {
        Self::InvalidRank(value.into())
    }

    /// Create an invalid light condition error
    pub fn invalid_light(value: impl Into<String>) -> Self {
        Self::InvalidLight(value.into())
    }

    /// Create an invalid vision type error
    pub fn invalid_vision(value: impl Into<String>) -> Self {
        Self::InvalidVision(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rank_error() {
        let err = RulesError::invalid_rank("grandmaster");
        assert!(matches!(err, RulesError::InvalidRank(_)));
        assert_eq!(err.to_string(), "Invalid proficiency rank: grandmaster");
    }

    #[test]
    fn test_invalid_light_error() {
        let err = RulesError::invalid_light("twilight");
        assert!(matches!(err, RulesError::InvalidLight(_)));
        assert_eq!(err.to_string(), "Invalid light condition: twilight");
    }

    #[test]
    fn test_invalid_vision_error() {
        let err = RulesError::invalid_vision("x-ray");
        assert!(matches!(err, RulesError::InvalidVision(_)));
        assert!(err.to_string().contains("x-ray"));
    }

    #[test]
    fn test_error_is_clone_and_comparable() {
        let err = RulesError::invalid_rank("novice");
        assert_eq!(err.clone(), RulesError::InvalidRank("novice".to_string()));
    }
}
