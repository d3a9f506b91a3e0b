//! Boss entity - Nightlords and expedition bosses

use serde::{Deserialize, Serialize};

use crate::value_objects::{DifficultyBucket, MAX_DIFFICULTY_RATING, MIN_DIFFICULTY_RATING};
use crate::{BossId, DomainError};

/// A boss encounter.
///
/// `weaknesses` has set semantics (membership is what matters) but keeps the
/// order the service sent. List fields default to empty so partial payloads
/// still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub id: BossId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 1 (trivial) to 10 (hardest). Absent ratings decode as 0 and fail
    /// `validate`.
    #[serde(default)]
    pub difficulty_rating: u8,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub damage_types: Vec<String>,
    #[serde(default)]
    pub expedition_name: String,
    #[serde(default)]
    pub recommended_strategies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loot_drops: Vec<String>,
    /// Character names suggested for the fight (advisory references)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_team: Vec<String>,
    /// Build names suggested for the fight (advisory references)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_builds: Vec<String>,
}

impl Boss {
    pub fn new(id: BossId, name: impl Into<String>, difficulty_rating: u8) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            difficulty_rating,
            min_level: 1,
            max_level: 1,
            weaknesses: Vec::new(),
            damage_types: Vec::new(),
            expedition_name: String::new(),
            recommended_strategies: Vec::new(),
            image: None,
            loot_drops: Vec::new(),
            recommended_team: Vec::new(),
            recommended_builds: Vec::new(),
        }
    }

    pub fn with_levels(mut self, min_level: u32, max_level: u32) -> Self {
        self.min_level = min_level;
        self.max_level = max_level;
        self
    }

    pub fn with_weakness(mut self, weakness: impl Into<String>) -> Self {
        self.weaknesses.push(weakness.into());
        self
    }

    pub fn with_expedition(mut self, expedition_name: impl Into<String>) -> Self {
        self.expedition_name = expedition_name.into();
        self
    }

    pub fn with_recommended_team(mut self, character: impl Into<String>) -> Self {
        self.recommended_team.push(character.into());
        self
    }

    pub fn difficulty_bucket(&self) -> DifficultyBucket {
        DifficultyBucket::from_rating(self.difficulty_rating)
    }

    /// Exact element-of-set match.
    pub fn has_weakness(&self, weakness: &str) -> bool {
        self.weaknesses.iter().any(|w| w == weakness)
    }

    /// Check the numeric invariants: rating in [1, 10] and min <= max level.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_DIFFICULTY_RATING..=MAX_DIFFICULTY_RATING).contains(&self.difficulty_rating) {
            return Err(DomainError::constraint(format!(
                "Boss '{}' has difficulty_rating {} outside {}..={}",
                self.name, self.difficulty_rating, MIN_DIFFICULTY_RATING, MAX_DIFFICULTY_RATING
            )));
        }
        if self.min_level > self.max_level {
            return Err(DomainError::constraint(format!(
                "Boss '{}' has min_level {} above max_level {}",
                self.name, self.min_level, self.max_level
            )));
        }
        Ok(())
    }
}
