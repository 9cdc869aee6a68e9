// src/map/levels.rs
//! Discrete influence levels.
//!
//! Maps built in dropdown mode name their influences instead of typing a
//! number; each level maps to a fixed weight in [-1, 1].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfluenceLevel {
    StrongNegative,
    ModerateNegative,
    WeakNegative,
    WeakPositive,
    ModeratePositive,
    StrongPositive,
}

impl InfluenceLevel {
    pub const ALL: [Self; 6] = [
        Self::StrongNegative,
        Self::ModerateNegative,
        Self::WeakNegative,
        Self::WeakPositive,
        Self::ModeratePositive,
        Self::StrongPositive,
    ];

    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::StrongNegative => -1.0,
            Self::ModerateNegative => -0.5,
            Self::WeakNegative => -0.25,
            Self::WeakPositive => 0.25,
            Self::ModeratePositive => 0.5,
            Self::StrongPositive => 1.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StrongNegative => "strong-negative",
            Self::ModerateNegative => "moderate-negative",
            Self::WeakNegative => "weak-negative",
            Self::WeakPositive => "weak-positive",
            Self::ModeratePositive => "moderate-positive",
            Self::StrongPositive => "strong-positive",
        }
    }

    /// Parses a level label. Case-insensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.label() == lowered)
    }
}
