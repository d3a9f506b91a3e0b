//! Request bodies sent to the guide data service.

use serde::{Deserialize, Serialize};

use nightreign_domain::CustomBuildDraft;

/// Body of `POST /api/custom-build`.
///
/// Built from a validated draft; values are trimmed and a blank secondary
/// weapon is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomBuildRequest {
    pub name: String,
    pub character: String,
    #[serde(rename = "type")]
    pub build_type: String,
    pub description: String,
    pub primary_weapon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_weapon: Option<String>,
    pub strategy: String,
}

impl From<&CustomBuildDraft> for CreateCustomBuildRequest {
    fn from(draft: &CustomBuildDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            character: draft.character.trim().to_string(),
            build_type: draft.build_type.trim().to_string(),
            description: draft.description.trim().to_string(),
            primary_weapon: draft.primary_weapon.trim().to_string(),
            secondary_weapon: draft.secondary_weapon().map(str::to_string),
            strategy: draft.strategy.trim().to_string(),
        }
    }
}
