//! Light and vision enumerations used by the sight rules.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ambient light at the observed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum LightCondition {
    Bright,
    Dim,
    Dark,
}

impl LightCondition {
    /// All light conditions, brightest first.
    pub const ALL: [LightCondition; 3] = [
        LightCondition::Bright,
        LightCondition::Dim,
        LightCondition::Dark,
    ];

    /// Wire name, as accepted by `FromStr` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            LightCondition::Bright => "bright",
            LightCondition::Dim => "dim",
            LightCondition::Dark => "dark",
        }
    }
}

impl fmt::Display for LightCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LightCondition {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bright" => Ok(LightCondition::Bright),
            "dim" => Ok(LightCondition::Dim),
            "dark" => Ok(LightCondition::Dark),
            _ => {
                tracing::debug!(light = s, "Rejected unknown light condition");
                Err(RulesError::invalid_light(s))
            }
        }
    }
}

impl TryFrom<String> for LightCondition {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How well a creature sees in reduced light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum VisionType {
    /// Sees only in bright light
    Average,
    /// Also sees in dim light
    LowLight,
    /// Darkvision: sees in any light
    Dark,
}

impl VisionType {
    /// All vision types, weakest first.
    pub const ALL: [VisionType; 3] = [VisionType::Average, VisionType::LowLight, VisionType::Dark];

    /// Wire name, as accepted by `FromStr` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisionType::Average => "average",
            VisionType::LowLight => "low-light",
            VisionType::Dark => "dark",
        }
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisionType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" => Ok(VisionType::Average),
            "low-light" => Ok(VisionType::LowLight),
            "dark" => Ok(VisionType::Dark),
            _ => {
                tracing::debug!(vision = s, "Rejected unknown vision type");
                Err(RulesError::invalid_vision(s))
            }
        }
    }
}

impl TryFrom<String> for VisionType {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
