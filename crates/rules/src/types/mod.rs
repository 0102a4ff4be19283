//! Vocabulary types shared by the rule functions.
//!
//! All types are closed `Copy` enums with stable wire names so that invalid
//! values are rejected when parsed instead of falling through a rule.

mod perception;
pub use perception::{LightCondition, VisionType};

mod proficiency;
pub use proficiency::ProficiencyRank;
