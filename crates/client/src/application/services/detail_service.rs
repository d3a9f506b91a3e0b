//! Detail Service - Boss recommendations and single-record lookups

use nightreign_domain::{Boss, BossId, Build, BuildId, Character, CharacterId};
use nightreign_shared::{endpoints, BossRecommendations};

use crate::application::api::Api;
use crate::application::error::ServiceError;

pub struct DetailService {
    api: Api,
}

impl DetailService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Characters and builds recommended against a boss.
    pub async fn boss_recommendations(
        &self,
        boss_id: &BossId,
    ) -> Result<BossRecommendations, ServiceError> {
        let recommendations: BossRecommendations = self
            .api
            .get(&endpoints::boss_recommendations(boss_id), &[])
            .await?;
        tracing::debug!(
            boss_id = %boss_id,
            characters = recommendations.recommended_characters.len(),
            builds = recommendations.recommended_builds.len(),
            "Boss recommendations loaded"
        );
        Ok(recommendations)
    }

    /// Fetch one boss; `Ok(None)` when the service does not know it.
    pub async fn boss(&self, boss_id: &BossId) -> Result<Option<Boss>, ServiceError> {
        self.get_optional(&endpoints::boss(boss_id)).await
    }

    pub async fn character(
        &self,
        character_id: &CharacterId,
    ) -> Result<Option<Character>, ServiceError> {
        self.get_optional(&endpoints::character(character_id)).await
    }

    pub async fn build(&self, build_id: &BuildId) -> Result<Option<Build>, ServiceError> {
        self.get_optional(&endpoints::build(build_id)).await
    }

    async fn get_optional<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ServiceError> {
        match self.api.get(path, &[]).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
