//! Common view over every guide record.

use super::{
    Achievement, Boss, Build, Character, Creature, Secret, Walkthrough, WeaponPassive, WeaponSkill,
};

/// Identity and headline shared by all entities, for list rows and lookups.
pub trait GuideEntry {
    fn entry_id(&self) -> &str;

    /// Name, or title for walkthroughs.
    fn entry_name(&self) -> &str;
}

macro_rules! impl_guide_entry {
    ($entity:ty, $name:ident) => {
        impl GuideEntry for $entity {
            fn entry_id(&self) -> &str {
                self.id.as_str()
            }

            fn entry_name(&self) -> &str {
                &self.$name
            }
        }
    };
}

impl_guide_entry!(Boss, name);
impl_guide_entry!(Character, name);
impl_guide_entry!(Build, name);
impl_guide_entry!(Achievement, name);
impl_guide_entry!(Walkthrough, title);
impl_guide_entry!(Creature, name);
impl_guide_entry!(Secret, name);
impl_guide_entry!(WeaponSkill, name);
impl_guide_entry!(WeaponPassive, name);
