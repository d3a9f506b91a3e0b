//! Content categories and the collections that back them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// One of the nine top-level content types of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Bosses,
    Characters,
    Builds,
    Achievements,
    Walkthroughs,
    Creatures,
    Secrets,
    WeaponSkills,
    WeaponPassives,
}

impl Category {
    /// Navigation order.
    pub const ALL: [Category; 9] = [
        Category::Bosses,
        Category::Characters,
        Category::Builds,
        Category::Achievements,
        Category::Walkthroughs,
        Category::Creatures,
        Category::Secrets,
        Category::WeaponSkills,
        Category::WeaponPassives,
    ];

    /// URL slug (`weapon-skills`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Bosses => "bosses",
            Self::Characters => "characters",
            Self::Builds => "builds",
            Self::Achievements => "achievements",
            Self::Walkthroughs => "walkthroughs",
            Self::Creatures => "creatures",
            Self::Secrets => "secrets",
            Self::WeaponSkills => "weapon-skills",
            Self::WeaponPassives => "weapon-passives",
        }
    }

    /// JSON key used by list envelopes and search results (`weapon_skills`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bosses => "bosses",
            Self::Characters => "characters",
            Self::Builds => "builds",
            Self::Achievements => "achievements",
            Self::Walkthroughs => "walkthroughs",
            Self::Creatures => "creatures",
            Self::Secrets => "secrets",
            Self::WeaponSkills => "weapon_skills",
            Self::WeaponPassives => "weapon_passives",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bosses => "Bosses",
            Self::Characters => "Characters",
            Self::Builds => "Builds",
            Self::Achievements => "Achievements",
            Self::Walkthroughs => "Walkthroughs",
            Self::Creatures => "Creatures & Enemies",
            Self::Secrets => "Secrets",
            Self::WeaponSkills => "Weapon Skills",
            Self::WeaponPassives => "Weapon Passives",
        }
    }

    /// Whether the service exposes attribute filters for this category.
    pub fn supports_filtering(&self) -> bool {
        matches!(self, Self::Bosses | Self::Characters | Self::Creatures)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts the slug, the JSON key, or either in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown category: {}", s)))
    }
}

/// A server-side collection read by the aggregate loader.
///
/// Builds are backed by two collections: the curated set and the
/// user-submitted custom set, merged at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Bosses,
    Characters,
    Builds,
    CustomBuilds,
    Achievements,
    Walkthroughs,
    Creatures,
    Secrets,
    WeaponSkills,
    WeaponPassives,
}

impl Collection {
    /// Load order of the aggregate loader.
    pub const ALL: [Collection; 10] = [
        Collection::Bosses,
        Collection::Characters,
        Collection::Builds,
        Collection::Achievements,
        Collection::Walkthroughs,
        Collection::CustomBuilds,
        Collection::Creatures,
        Collection::Secrets,
        Collection::WeaponSkills,
        Collection::WeaponPassives,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::CustomBuilds => "custom-builds",
            other => other.category().slug(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::CustomBuilds => "custom_builds",
            other => other.category().key(),
        }
    }

    /// The category this collection contributes to.
    pub fn category(&self) -> Category {
        match self {
            Self::Bosses => Category::Bosses,
            Self::Characters => Category::Characters,
            Self::Builds | Self::CustomBuilds => Category::Builds,
            Self::Achievements => Category::Achievements,
            Self::Walkthroughs => Category::Walkthroughs,
            Self::Creatures => Category::Creatures,
            Self::Secrets => Category::Secrets,
            Self::WeaponSkills => Category::WeaponSkills,
            Self::WeaponPassives => Category::WeaponPassives,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
