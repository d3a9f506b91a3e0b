//! The single entity open in the detail view.

use serde::{Deserialize, Serialize};

use crate::{
    AchievementId, BossId, BuildId, Category, CharacterId, CreatureId, SecretId, WalkthroughId,
    WeaponPassiveId, WeaponSkillId,
};

/// At most one entity is selected at a time; selecting another replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "category", content = "id", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Boss(BossId),
    Character(CharacterId),
    Build(BuildId),
    Achievement(AchievementId),
    Walkthrough(WalkthroughId),
    Creature(CreatureId),
    Secret(SecretId),
    WeaponSkill(WeaponSkillId),
    WeaponPassive(WeaponPassiveId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Self::None => None,
            Self::Boss(_) => Some(Category::Bosses),
            Self::Character(_) => Some(Category::Characters),
            Self::Build(_) => Some(Category::Builds),
            Self::Achievement(_) => Some(Category::Achievements),
            Self::Walkthrough(_) => Some(Category::Walkthroughs),
            Self::Creature(_) => Some(Category::Creatures),
            Self::Secret(_) => Some(Category::Secrets),
            Self::WeaponSkill(_) => Some(Category::WeaponSkills),
            Self::WeaponPassive(_) => Some(Category::WeaponPassives),
        }
    }

    /// Raw id of the selected entity.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Boss(id) => Some(id.as_str()),
            Self::Character(id) => Some(id.as_str()),
            Self::Build(id) => Some(id.as_str()),
            Self::Achievement(id) => Some(id.as_str()),
            Self::Walkthrough(id) => Some(id.as_str()),
            Self::Creature(id) => Some(id.as_str()),
            Self::Secret(id) => Some(id.as_str()),
            Self::WeaponSkill(id) => Some(id.as_str()),
            Self::WeaponPassive(id) => Some(id.as_str()),
        }
    }

    /// Build a selection from a category and a raw id.
    pub fn of(category: Category, id: impl Into<String>) -> Self {
        let id = id.into();
        match category {
            Category::Bosses => Self::Boss(id.into()),
            Category::Characters => Self::Character(id.into()),
            Category::Builds => Self::Build(id.into()),
            Category::Achievements => Self::Achievement(id.into()),
            Category::Walkthroughs => Self::Walkthrough(id.into()),
            Category::Creatures => Self::Creature(id.into()),
            Category::Secrets => Self::Secret(id.into()),
            Category::WeaponSkills => Self::WeaponSkill(id.into()),
            Category::WeaponPassives => Self::WeaponPassive(id.into()),
        }
    }

    pub fn boss_id(&self) -> Option<&BossId> {
        match self {
            Self::Boss(id) => Some(id),
            _ => None,
        }
    }
}
