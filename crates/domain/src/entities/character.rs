//! Character entity - Playable Nightfarers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CharacterId;

/// A playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub primary_stat: String,
    #[serde(default)]
    pub weapon_type: String,
    #[serde(default)]
    pub playstyle: Playstyle,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub damage_types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub starting_equipment: Vec<String>,
    /// Build names (advisory references)
    #[serde(default)]
    pub recommended_builds: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>, playstyle: Playstyle) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            primary_stat: String::new(),
            weapon_type: String::new(),
            playstyle,
            max_level: 15,
            damage_types: Vec::new(),
            abilities: Vec::new(),
            starting_equipment: Vec::new(),
            recommended_builds: Vec::new(),
            image: None,
        }
    }
}

/// How a character is meant to be played.
///
/// The service is free to send labels outside the known set ("Ranged DPS");
/// those are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Playstyle {
    Tank,
    Dps,
    Support,
    Versatile,
    Marksman,
    Spellcaster,
    Other(String),
}

impl Playstyle {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tank => "Tank",
            Self::Dps => "DPS",
            Self::Support => "Support",
            Self::Versatile => "Versatile",
            Self::Marksman => "Marksman",
            Self::Spellcaster => "Spellcaster",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Default for Playstyle {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Playstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Playstyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Tank" => Self::Tank,
            "DPS" => Self::Dps,
            "Support" => Self::Support,
            "Versatile" => Self::Versatile,
            "Marksman" => Self::Marksman,
            "Spellcaster" => Self::Spellcaster,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Playstyle {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Playstyle> for String {
    fn from(value: Playstyle) -> Self {
        match value {
            Playstyle::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
