//! REST paths of the guide data service, relative to the base URL.

use nightreign_domain::{BossId, BuildId, Category, CharacterId, Collection};

pub const SEARCH: &str = "/api/search";
pub const CUSTOM_BUILD: &str = "/api/custom-build";
pub const FILTER_BOSSES: &str = "/api/filter-bosses";
pub const FILTER_CHARACTERS: &str = "/api/filter-characters";
pub const FILTER_CREATURES: &str = "/api/filter-creatures";

/// Query parameter carrying the free-text search.
pub const SEARCH_QUERY_PARAM: &str = "query";

/// `GET` path listing a whole collection, e.g. `/api/weapon-skills`.
pub fn collection(collection: Collection) -> String {
    format!("/api/{}", collection.slug())
}

/// `GET` path of the attribute filter endpoint, for categories that have one.
pub fn filter(category: Category) -> Option<&'static str> {
    match category {
        Category::Bosses => Some(FILTER_BOSSES),
        Category::Characters => Some(FILTER_CHARACTERS),
        Category::Creatures => Some(FILTER_CREATURES),
        _ => None,
    }
}

pub fn boss_recommendations(boss_id: &BossId) -> String {
    format!("/api/boss-recommendations/{}", boss_id)
}

pub fn boss(boss_id: &BossId) -> String {
    format!("/api/bosses/{}", boss_id)
}

pub fn character(character_id: &CharacterId) -> String {
    format!("/api/characters/{}", character_id)
}

pub fn build(build_id: &BuildId) -> String {
    format!("/api/builds/{}", build_id)
}
