//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and layers serde_json conversion on
//! top, so services deal in domain records while adapters stay object-safe.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use nightreign_shared::extract_list;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

fn owned_pairs(query: &[(&str, String)]) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get_value(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.raw.get_json(path, &owned_pairs(query)).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let value = self.get_value(path, query).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// `GET` an envelope and pull out the list under `key`. A missing or
    /// malformed envelope is a parse error here; callers that tolerate it
    /// use [`Api::get_value`] plus [`extract_list`] themselves.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        key: &str,
    ) -> Result<Vec<T>, ApiError> {
        let value = self.get_value(path, query).await?;
        extract_list(value, key).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn post_value<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.raw.post_json(path, &body_value).await
    }
}
