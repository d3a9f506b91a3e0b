extern crate self as nightreign_domain;

pub mod category;
pub mod entities;
pub mod error;
pub mod ids;
pub mod selection;
pub mod value_objects;

pub use category::{Category, Collection};

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    find_rank_gap, Achievement, AchievementDifficulty, Boss, Build, Chapter, Character, Creature,
    CreatureType, GuideEntry, Playstyle, Secret, ThreatLevel, Walkthrough, WeaponPassive, WeaponSkill,
};

pub use error::{DomainError, ValidationError};

// Re-export ID types
pub use ids::{
    AchievementId, BossId, BuildId, CharacterId, CreatureId, SecretId, WalkthroughId,
    WeaponPassiveId, WeaponSkillId,
};

pub use selection::Selection;

pub use value_objects::{
    CustomBuildDraft, DifficultyBucket, MAX_DIFFICULTY_RATING, MIN_DIFFICULTY_RATING,
};
