//! Catalog Service - Aggregate loader for every guide collection
//!
//! Issues one read per collection concurrently and waits for all of them.
//! A collection that is missing, malformed, or answered with an error status
//! degrades to an empty list; only a transport failure fails the batch.

use serde::de::DeserializeOwned;

use nightreign_domain::Collection;
use nightreign_shared::{endpoints, extract_list};

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::ports::outbound::ApiError;
use crate::state::CatalogData;

pub struct CatalogService {
    api: Api,
}

impl CatalogService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Load every collection.
    pub async fn load_all(&self) -> Result<CatalogData, ServiceError> {
        let (
            bosses,
            characters,
            builds,
            achievements,
            walkthroughs,
            custom_builds,
            creatures,
            secrets,
            weapon_skills,
            weapon_passives,
        ) = tokio::join!(
            self.read(Collection::Bosses),
            self.read(Collection::Characters),
            self.read(Collection::Builds),
            self.read(Collection::Achievements),
            self.read(Collection::Walkthroughs),
            self.read(Collection::CustomBuilds),
            self.read(Collection::Creatures),
            self.read(Collection::Secrets),
            self.read(Collection::WeaponSkills),
            self.read(Collection::WeaponPassives),
        );

        let data = CatalogData {
            bosses: bosses?,
            characters: characters?,
            builds: builds?,
            custom_builds: custom_builds?,
            achievements: achievements?,
            walkthroughs: walkthroughs?,
            creatures: creatures?,
            secrets: secrets?,
            weapon_skills: weapon_skills?,
            weapon_passives: weapon_passives?,
        };

        tracing::info!(
            bosses = data.bosses.len(),
            characters = data.characters.len(),
            builds = data.builds.len(),
            custom_builds = data.custom_builds.len(),
            creatures = data.creatures.len(),
            "Catalog loaded"
        );
        Ok(data)
    }

    async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, ApiError> {
        let payload = match self.api.get_value(&endpoints::collection(collection), &[]).await {
            Ok(payload) => payload,
            Err(e) if e.is_transport() => return Err(e),
            Err(e) => {
                tracing::warn!(
                    collection = %collection,
                    error = %e,
                    "Collection unavailable, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        Ok(extract_list(payload, collection.key()).unwrap_or_else(|e| {
            tracing::warn!(collection = %collection, error = %e, "Malformed collection payload");
            Vec::new()
        }))
    }
}
