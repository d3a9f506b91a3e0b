//! Attribute filters for the boss, character and creature listings.
//!
//! Filter values arrive as loose string pairs from the UI. Each typed filter
//! reads the keys it understands, ignores the rest, and treats blank or
//! unparseable values as "no constraint". The same filter builds the query
//! string for the service and re-checks the response client-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nightreign_domain::{Boss, Category, Character, Creature, DifficultyBucket};

use crate::endpoints;

/// Raw filter form values for one category, keyed by wire parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues(BTreeMap<String, String>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Trimmed value for `key`, or `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// True when no key carries a constraint.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }

    /// Reset every key to blank, keeping the keys.
    pub fn clear(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn parse_level(values: &FilterValues, key: &'static str) -> Option<u32> {
    let raw = values.get(key)?;
    match raw.parse::<u32>() {
        Ok(level) => Some(level),
        Err(_) => {
            tracing::warn!(key, value = raw, "Ignoring non-numeric level filter");
            None
        }
    }
}

/// Boss filter: difficulty bucket, weakness membership and level bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BossFilter {
    pub difficulty: Option<DifficultyBucket>,
    pub weakness: Option<String>,
    pub min_level: Option<u32>,
    pub max_level: Option<u32>,
}

impl BossFilter {
    pub fn from_values(values: &FilterValues) -> Self {
        let difficulty = values.get("difficulty").and_then(|raw| {
            raw.parse::<DifficultyBucket>()
                .map_err(|e| tracing::warn!(value = raw, error = %e, "Ignoring difficulty filter"))
                .ok()
        });

        Self {
            difficulty,
            weakness: values.get("weakness").map(str::to_string),
            min_level: parse_level(values, "min_level"),
            max_level: parse_level(values, "max_level"),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.slug().to_string()));
        }
        if let Some(weakness) = &self.weakness {
            pairs.push(("weakness", weakness.clone()));
        }
        if let Some(min_level) = self.min_level {
            pairs.push(("min_level", min_level.to_string()));
        }
        if let Some(max_level) = self.max_level {
            pairs.push(("max_level", max_level.to_string()));
        }
        pairs
    }

    pub fn matches(&self, boss: &Boss) -> bool {
        self.difficulty
            .is_none_or(|bucket| boss.difficulty_bucket() == bucket)
            && self
                .weakness
                .as_deref()
                .is_none_or(|weakness| boss.has_weakness(weakness))
            && self.min_level.is_none_or(|min| boss.min_level >= min)
            && self.max_level.is_none_or(|max| boss.max_level <= max)
    }
}

/// Character filter: exact playstyle label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    pub playstyle: Option<String>,
}

impl CharacterFilter {
    pub fn from_values(values: &FilterValues) -> Self {
        Self {
            playstyle: values.get("playstyle").map(str::to_string),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.playstyle
            .iter()
            .map(|playstyle| ("playstyle", playstyle.clone()))
            .collect()
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.playstyle
            .as_deref()
            .is_none_or(|playstyle| character.playstyle.as_str() == playstyle)
    }
}

/// Creature filter: exact type and threat level, weakness membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatureFilter {
    pub creature_type: Option<String>,
    pub threat_level: Option<String>,
    pub weakness: Option<String>,
}

impl CreatureFilter {
    pub fn from_values(values: &FilterValues) -> Self {
        Self {
            creature_type: values.get("type").map(str::to_string),
            threat_level: values.get("threat_level").map(str::to_string),
            weakness: values.get("weakness").map(str::to_string),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(creature_type) = &self.creature_type {
            pairs.push(("type", creature_type.clone()));
        }
        if let Some(threat_level) = &self.threat_level {
            pairs.push(("threat_level", threat_level.clone()));
        }
        if let Some(weakness) = &self.weakness {
            pairs.push(("weakness", weakness.clone()));
        }
        pairs
    }

    pub fn matches(&self, creature: &Creature) -> bool {
        self.creature_type
            .as_deref()
            .is_none_or(|t| creature.creature_type.as_str() == t)
            && self
                .threat_level
                .as_deref()
                .is_none_or(|level| creature.threat_level.as_str() == level)
            && self
                .weakness
                .as_deref()
                .is_none_or(|weakness| creature.has_weakness(weakness))
    }
}

/// A typed filter for one of the filterable categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Bosses(BossFilter),
    Characters(CharacterFilter),
    Creatures(CreatureFilter),
}

impl CategoryFilter {
    /// `None` for categories without attribute filters.
    pub fn for_category(category: Category, values: &FilterValues) -> Option<Self> {
        match category {
            Category::Bosses => Some(Self::Bosses(BossFilter::from_values(values))),
            Category::Characters => Some(Self::Characters(CharacterFilter::from_values(values))),
            Category::Creatures => Some(Self::Creatures(CreatureFilter::from_values(values))),
            _ => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Bosses(_) => Category::Bosses,
            Self::Characters(_) => Category::Characters,
            Self::Creatures(_) => Category::Creatures,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Bosses(_) => endpoints::FILTER_BOSSES,
            Self::Characters(_) => endpoints::FILTER_CHARACTERS,
            Self::Creatures(_) => endpoints::FILTER_CREATURES,
        }
    }

    /// Query parameters with blank values omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Bosses(f) => f.query_pairs(),
            Self::Characters(f) => f.query_pairs(),
            Self::Creatures(f) => f.query_pairs(),
        }
    }
}
