//! Search Service - Free-text search across categories

use nightreign_shared::{endpoints, SearchResult};

use crate::application::api::Api;
use crate::application::error::ServiceError;

pub struct SearchService {
    api: Api,
}

impl SearchService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Search every searchable category.
    ///
    /// A query that is empty after trimming means "no active search" and
    /// returns `Ok(None)` without touching the network.
    pub async fn search(&self, query: &str) -> Result<Option<SearchResult>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let mut result: SearchResult = self
            .api
            .get(
                endpoints::SEARCH,
                &[(endpoints::SEARCH_QUERY_PARAM, query.to_string())],
            )
            .await?;

        if let Some(reported) = result.normalize(query) {
            tracing::warn!(
                query,
                reported,
                computed = result.total_results,
                "Search total disagrees with result lists"
            );
        }

        tracing::debug!(query, total = result.total_results, "Search completed");
        Ok(Some(result))
    }
}
