//! Domain entities - Guide records with service-owned identity

mod achievement;
mod boss;
mod build;
mod character;
mod creature;
mod entry;
mod secret;
mod walkthrough;
mod weapon;

pub use achievement::{find_rank_gap, Achievement, AchievementDifficulty};
pub use boss::Boss;
pub use build::Build;
pub use character::{Character, Playstyle};
pub use creature::{Creature, CreatureType, ThreatLevel};
pub use entry::GuideEntry;
pub use secret::Secret;
pub use walkthrough::{Chapter, Walkthrough};
pub use weapon::{WeaponPassive, WeaponSkill};
