//! Achievement entity - Trophies and their completion rates

use serde::{Deserialize, Serialize};

use crate::AchievementId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: AchievementDifficulty,
    /// Dense ordinal, 1..N, unique across achievements. Absent ranks decode
    /// as 0 and show up in `find_rank_gap`.
    #[serde(default)]
    pub rank: u32,
    /// Share of players who earned it, 0-100
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub reward: String,
    #[serde(default)]
    pub requirements: String,
}

/// Achievement difficulty tiers as labelled by the service. Unrecognised
/// tiers are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementDifficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Extreme,
    Platinum,
    Other(String),
}

impl AchievementDifficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Extreme => "Extreme",
            Self::Platinum => "Platinum",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Default for AchievementDifficulty {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::fmt::Display for AchievementDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AchievementDifficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            "Very Hard" => Self::VeryHard,
            "Extreme" => Self::Extreme,
            "Platinum" => Self::Platinum,
            _ => Self::Other(value),
        }
    }
}

impl From<AchievementDifficulty> for String {
    fn from(value: AchievementDifficulty) -> Self {
        match value {
            AchievementDifficulty::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Ranks must form the dense sequence 1..=N. Returns the first rank that is
/// missing or duplicated, if any.
pub fn find_rank_gap(achievements: &[Achievement]) -> Option<u32> {
    let mut ranks: Vec<u32> = achievements.iter().map(|a| a.rank).collect();
    ranks.sort_unstable();
    ranks
        .iter()
        .zip(1u32..)
        .find(|(rank, expected)| **rank != *expected)
        .map(|(_, expected)| expected)
}
