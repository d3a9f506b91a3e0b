//! In-memory catalog of guide content, one slice per collection.

use std::collections::HashSet;

use nightreign_domain::{
    find_rank_gap, Achievement, Boss, Build, Category, Character, Creature,
    GuideEntry, Secret, Walkthrough, WeaponPassive, WeaponSkill,
};

use super::sequence::{Sequenced, Ticket};

/// Plain result of one aggregate load, before it is applied to a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogData {
    pub bosses: Vec<Boss>,
    pub characters: Vec<Character>,
    pub builds: Vec<Build>,
    pub custom_builds: Vec<Build>,
    pub achievements: Vec<Achievement>,
    pub walkthroughs: Vec<Walkthrough>,
    pub creatures: Vec<Creature>,
    pub secrets: Vec<Secret>,
    pub weapon_skills: Vec<WeaponSkill>,
    pub weapon_passives: Vec<WeaponPassive>,
}

/// Result of a filtered category read.
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredListing {
    Bosses(Vec<Boss>),
    Characters(Vec<Character>),
    Creatures(Vec<Creature>),
}

impl FilteredListing {
    pub fn category(&self) -> Category {
        match self {
            Self::Bosses(_) => Category::Bosses,
            Self::Characters(_) => Category::Characters,
            Self::Creatures(_) => Category::Creatures,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bosses(v) => v.len(),
            Self::Characters(v) => v.len(),
            Self::Creatures(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A name reference that does not resolve to any character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub category: Category,
    pub entity: String,
    pub missing_character: String,
}

/// Cached read-only copies of every collection.
///
/// Each slice is replaced wholesale and only by a response newer than the one
/// that last wrote it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bosses: Sequenced<Vec<Boss>>,
    characters: Sequenced<Vec<Character>>,
    builds: Sequenced<Vec<Build>>,
    custom_builds: Sequenced<Vec<Build>>,
    achievements: Sequenced<Vec<Achievement>>,
    walkthroughs: Sequenced<Vec<Walkthrough>>,
    creatures: Sequenced<Vec<Creature>>,
    secrets: Sequenced<Vec<Secret>>,
    weapon_skills: Sequenced<Vec<WeaponSkill>>,
    weapon_passives: Sequenced<Vec<WeaponPassive>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full load. Returns how many slices were replaced; slices
    /// written by a newer request keep their content.
    pub fn apply_load(&mut self, ticket: Ticket, data: CatalogData) -> usize {
        [
            self.bosses.apply(ticket, data.bosses),
            self.characters.apply(ticket, data.characters),
            self.builds.apply(ticket, data.builds),
            self.custom_builds.apply(ticket, data.custom_builds),
            self.achievements.apply(ticket, data.achievements),
            self.walkthroughs.apply(ticket, data.walkthroughs),
            self.creatures.apply(ticket, data.creatures),
            self.secrets.apply(ticket, data.secrets),
            self.weapon_skills.apply(ticket, data.weapon_skills),
            self.weapon_passives.apply(ticket, data.weapon_passives),
        ]
        .into_iter()
        .filter(|applied| *applied)
        .count()
    }

    /// Replace one filterable slice. Returns `false` for a stale response.
    pub fn apply_filtered(&mut self, ticket: Ticket, listing: FilteredListing) -> bool {
        match listing {
            FilteredListing::Bosses(v) => self.bosses.apply(ticket, v),
            FilteredListing::Characters(v) => self.characters.apply(ticket, v),
            FilteredListing::Creatures(v) => self.creatures.apply(ticket, v),
        }
    }

    pub fn bosses(&self) -> &[Boss] {
        self.bosses.get()
    }

    pub fn characters(&self) -> &[Character] {
        self.characters.get()
    }

    pub fn curated_builds(&self) -> &[Build] {
        self.builds.get()
    }

    pub fn custom_builds(&self) -> &[Build] {
        self.custom_builds.get()
    }

    /// Builds listing: curated first, then user-submitted.
    pub fn builds(&self) -> impl Iterator<Item = &Build> {
        self.builds.get().iter().chain(self.custom_builds.get().iter())
    }

    pub fn achievements(&self) -> &[Achievement] {
        self.achievements.get()
    }

    pub fn walkthroughs(&self) -> &[Walkthrough] {
        self.walkthroughs.get()
    }

    pub fn creatures(&self) -> &[Creature] {
        self.creatures.get()
    }

    pub fn secrets(&self) -> &[Secret] {
        self.secrets.get()
    }

    pub fn weapon_skills(&self) -> &[WeaponSkill] {
        self.weapon_skills.get()
    }

    pub fn weapon_passives(&self) -> &[WeaponPassive] {
        self.weapon_passives.get()
    }

    /// Listing for a category, in service order.
    pub fn entries(&self, category: Category) -> Vec<&dyn GuideEntry> {
        fn erase<T: GuideEntry>(items: &[T]) -> Vec<&dyn GuideEntry> {
            items.iter().map(|item| item as &dyn GuideEntry).collect()
        }

        match category {
            Category::Bosses => erase(self.bosses()),
            Category::Characters => erase(self.characters()),
            Category::Builds => self.builds().map(|b| b as &dyn GuideEntry).collect(),
            Category::Achievements => erase(self.achievements()),
            Category::Walkthroughs => erase(self.walkthroughs()),
            Category::Creatures => erase(self.creatures()),
            Category::Secrets => erase(self.secrets()),
            Category::WeaponSkills => erase(self.weapon_skills()),
            Category::WeaponPassives => erase(self.weapon_passives()),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Builds => self.curated_builds().len() + self.custom_builds().len(),
            other => self.entries(other).len(),
        }
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.len(*c) == 0)
    }

    pub fn find_boss(&self, id: &str) -> Option<&Boss> {
        self.bosses().iter().find(|b| b.id.as_str() == id)
    }

    pub fn find_build(&self, id: &str) -> Option<&Build> {
        self.builds().find(|b| b.id.as_str() == id)
    }

    pub fn find_character(&self, id: &str) -> Option<&Character> {
        self.characters().iter().find(|c| c.id.as_str() == id)
    }

    /// Find any entity by category and id.
    pub fn find(&self, category: Category, id: &str) -> Option<&dyn GuideEntry> {
        self.entries(category)
            .into_iter()
            .find(|entry| entry.entry_id() == id)
    }

    /// Data invariant violations: rating range, level order, achievement
    /// rank density and id uniqueness. Advisory only.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations: Vec<String> = self
            .bosses()
            .iter()
            .filter_map(|boss| boss.validate().err())
            .map(|e| e.to_string())
            .collect();

        if let Some(rank) = find_rank_gap(self.achievements()) {
            violations.push(format!(
                "Achievement ranks are not dense: rank {} missing or duplicated",
                rank
            ));
        }

        for category in Category::ALL {
            let mut seen = HashSet::new();
            for entry in self.entries(category) {
                if !seen.insert(entry.entry_id()) {
                    violations.push(format!(
                        "Duplicate id '{}' in {}",
                        entry.entry_id(),
                        category
                    ));
                }
            }
        }

        violations
    }

    /// Build and boss references to character names that do not exist.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let names: HashSet<&str> = self.characters().iter().map(|c| c.name.as_str()).collect();
        if names.is_empty() {
            return Vec::new();
        }

        let from_builds = self.builds().flat_map(|build| {
            build
                .referenced_characters()
                .filter(|name| !names.contains(name))
                .map(|name| DanglingReference {
                    category: Category::Builds,
                    entity: build.name.clone(),
                    missing_character: name.to_string(),
                })
                .collect::<Vec<_>>()
        });

        let from_bosses = self.bosses().iter().flat_map(|boss| {
            boss.recommended_team
                .iter()
                .filter(|name| !names.contains(name.as_str()))
                .map(|name| DanglingReference {
                    category: Category::Bosses,
                    entity: boss.name.clone(),
                    missing_character: name.clone(),
                })
                .collect::<Vec<_>>()
        });

        from_builds.chain(from_bosses).collect()
    }
}
