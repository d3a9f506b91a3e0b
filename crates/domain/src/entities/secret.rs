//! Secret entity - Hidden areas and rewards

use serde::{Deserialize, Serialize};

use crate::SecretId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    pub id: SecretId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    /// Free-form label; not the boss bucket scale
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub reward: String,
    #[serde(default)]
    pub how_to_find: String,
}
