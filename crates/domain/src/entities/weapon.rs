//! Weapon skill and weapon passive entities

use serde::{Deserialize, Serialize};

use crate::{WeaponPassiveId, WeaponSkillId};

/// An active weapon art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSkill {
    pub id: WeaponSkillId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fp_cost: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub damage_type: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub usable_with: String,
}

/// A passive effect carried by a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponPassive {
    pub id: WeaponPassiveId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub scaling: String,
    #[serde(default)]
    pub compatible_characters: Vec<String>,
    #[serde(default)]
    pub weapon_types: Vec<String>,
}
