//! Custom build draft - an unsaved, user-authored build pending submission

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Form state for a custom build.
///
/// Every field is kept as typed by the user; blank means "not filled in".
/// `secondary_weapon` is the only optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBuildDraft {
    pub name: String,
    /// Name of the character the build targets
    pub character: String,
    #[serde(rename = "type")]
    pub build_type: String,
    pub description: String,
    pub primary_weapon: String,
    pub secondary_weapon: String,
    pub strategy: String,
}

impl CustomBuildDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = character.into();
        self
    }

    pub fn with_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = build_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_primary_weapon(mut self, weapon: impl Into<String>) -> Self {
        self.primary_weapon = weapon.into();
        self
    }

    pub fn with_secondary_weapon(mut self, weapon: impl Into<String>) -> Self {
        self.secondary_weapon = weapon.into();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Set a field by its wire name. Returns `false` for unknown fields.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "character" => &mut self.character,
            "type" => &mut self.build_type,
            "description" => &mut self.description,
            "primary_weapon" => &mut self.primary_weapon,
            "secondary_weapon" => &mut self.secondary_weapon,
            "strategy" => &mut self.strategy,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Required-field check run before any submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 6] = [
            ("name", self.name.as_str()),
            ("character", self.character.as_str()),
            ("type", self.build_type.as_str()),
            ("description", self.description.as_str()),
            ("primary_weapon", self.primary_weapon.as_str()),
            ("strategy", self.strategy.as_str()),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::missing_fields(missing))
        }
    }

    /// Secondary weapon, or `None` when left blank.
    pub fn secondary_weapon(&self) -> Option<&str> {
        let trimmed = self.secondary_weapon.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
