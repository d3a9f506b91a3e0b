//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters exchange plain `serde_json::Value`s so the port can live behind
//! `Arc<dyn RawApiPort>`. The application layer wraps it in the typed
//! [`Api`](crate::application::api::Api).

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// `GET path?query`. Pairs are sent in order; callers omit blank values.
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
