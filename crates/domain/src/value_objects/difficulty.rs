//! Discretized boss difficulty.
//!
//! The same bucket drives the `difficulty` filter and the difficulty label
//! shown on boss cards and detail views, so the thresholds must stay exact:
//! rating >= 9 is extreme, >= 7 hard, >= 5 medium, anything lower easy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Lowest valid `difficulty_rating`.
pub const MIN_DIFFICULTY_RATING: u8 = 1;
/// Highest valid `difficulty_rating`.
pub const MAX_DIFFICULTY_RATING: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyBucket {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl DifficultyBucket {
    pub const ALL: [DifficultyBucket; 4] = [
        DifficultyBucket::Easy,
        DifficultyBucket::Medium,
        DifficultyBucket::Hard,
        DifficultyBucket::Extreme,
    ];

    /// Bucket for a numeric rating. Total over `u8`; out-of-range ratings
    /// still land in the nearest bucket.
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 9 {
            Self::Extreme
        } else if rating >= 7 {
            Self::Hard
        } else if rating >= 5 {
            Self::Medium
        } else {
            Self::Easy
        }
    }

    /// Wire value used by the `difficulty` filter parameter.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }

    /// Display label for cards and detail views.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for DifficultyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DifficultyBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "extreme" => Ok(Self::Extreme),
            _ => Err(DomainError::parse(format!("Unknown difficulty: {}", s))),
        }
    }
}
