//! Creature entity - Field enemies and their threat levels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CreatureId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub creature_type: CreatureType,
    #[serde(default)]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub resistances: Vec<String>,
    #[serde(default)]
    pub damage_types: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Creature {
    pub fn new(
        id: CreatureId,
        name: impl Into<String>,
        creature_type: CreatureType,
        threat_level: ThreatLevel,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            creature_type,
            threat_level,
            location: String::new(),
            weaknesses: Vec::new(),
            resistances: Vec::new(),
            damage_types: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn with_weakness(mut self, weakness: impl Into<String>) -> Self {
        self.weaknesses.push(weakness.into());
        self
    }

    pub fn has_weakness(&self, weakness: &str) -> bool {
        self.weaknesses.iter().any(|w| w == weakness)
    }
}

/// Creature classification. Labels outside the known set are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreatureType {
    Nightlord,
    EliteEnemy,
    LargeEnemy,
    MediumEnemy,
    SmallEnemy,
    SpecialEnemy,
    Other(String),
}

impl CreatureType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nightlord => "Nightlord",
            Self::EliteEnemy => "Elite Enemy",
            Self::LargeEnemy => "Large Enemy",
            Self::MediumEnemy => "Medium Enemy",
            Self::SmallEnemy => "Small Enemy",
            Self::SpecialEnemy => "Special Enemy",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Default for CreatureType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CreatureType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Nightlord" => Self::Nightlord,
            "Elite Enemy" => Self::EliteEnemy,
            "Large Enemy" => Self::LargeEnemy,
            "Medium Enemy" => Self::MediumEnemy,
            "Small Enemy" => Self::SmallEnemy,
            "Special Enemy" => Self::SpecialEnemy,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for CreatureType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CreatureType> for String {
    fn from(value: CreatureType) -> Self {
        match value {
            CreatureType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// How dangerous a creature is. Labels outside the known set are kept so
/// filters on them still match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Extreme,
    Ultimate,
    Other(String),
}

impl ThreatLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
            Self::Ultimate => "Ultimate",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Default for ThreatLevel {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ThreatLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Extreme" => Self::Extreme,
            "Ultimate" => Self::Ultimate,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ThreatLevel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ThreatLevel> for String {
    fn from(value: ThreatLevel) -> Self {
        match value {
            ThreatLevel::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_creature_with_type_rename() {
        let json = serde_json::json!({
            "id": "c1",
            "name": "Fell Omen",
            "type": "Elite Enemy",
            "threat_level": "Extreme",
            "weaknesses": ["Holy"]
        });
        let creature: Creature = serde_json::from_value(json).unwrap();
        assert_eq!(creature.creature_type, CreatureType::EliteEnemy);
        assert_eq!(creature.threat_level, ThreatLevel::Extreme);
        assert!(creature.has_weakness("Holy"));
    }

    #[test]
    fn unknown_labels_do_not_fail_decoding() {
        let json = serde_json::json!({
            "id": "c2",
            "name": "Mystery",
            "type": "Ghost",
            "threat_level": "Apocalyptic"
        });
        let creature: Creature = serde_json::from_value(json).unwrap();
        assert_eq!(creature.creature_type.as_str(), "Ghost");
        assert_eq!(creature.threat_level, ThreatLevel::Other("Apocalyptic".to_string()));

        let reencoded = serde_json::to_value(&creature).unwrap();
        assert_eq!(reencoded["threat_level"], "Apocalyptic");
        assert_eq!(reencoded["type"], "Ghost");
    }

    #[test]
    fn creature_without_classification_still_decodes() {
        let json = serde_json::json!({ "id": "c3", "name": "Shade" });
        let creature: Creature = serde_json::from_value(json).unwrap();
        assert_eq!(creature.threat_level.as_str(), "");
        assert_eq!(creature.creature_type.as_str(), "");
    }
}
