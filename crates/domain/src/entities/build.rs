//! Build entity - Curated and user-submitted loadouts
//!
//! Custom builds share this shape with curated ones; the two collections are
//! only merged when a listing is read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::BuildId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Character name (advisory reference, not enforced)
    #[serde(default)]
    pub character: String,
    #[serde(rename = "type", default)]
    pub build_type: String,
    #[serde(default)]
    pub primary_weapon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_weapon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_set: Option<String>,
    #[serde(default)]
    pub talismans: Vec<String>,
    #[serde(default)]
    pub recommended_stats: BTreeMap<String, u32>,
    /// Character names the build suits
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl Build {
    pub fn new(id: BuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            character: String::new(),
            build_type: String::new(),
            primary_weapon: String::new(),
            secondary_weapon: None,
            armor_set: None,
            talismans: Vec::new(),
            recommended_stats: BTreeMap::new(),
            best_for: Vec::new(),
            strategy: None,
        }
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = character.into();
        self
    }

    /// Character names this build points at, from `character` and `best_for`.
    pub fn referenced_characters(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.character.as_str())
            .filter(|name| !name.is_empty())
            .chain(self.best_for.iter().map(String::as_str))
    }
}
