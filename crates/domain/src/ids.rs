use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiers are assigned by the guide service and treated as opaque
/// strings. Locally generated ids (tests, drafts) use a v4 UUID.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Encounter IDs
define_id!(BossId);
define_id!(CreatureId);

// Character and loadout IDs
define_id!(CharacterId);
define_id!(BuildId);

// Progression IDs
define_id!(AchievementId);
define_id!(WalkthroughId);
define_id!(SecretId);

// Weapon IDs
define_id!(WeaponSkillId);
define_id!(WeaponPassiveId);
