//! reqwest adapter for the guide data service

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP client implementing [`RawApiPort`] against a base URL.
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            return Err(ApiError::status(status.as_u16(), error_text));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        tracing::debug!(path, params = query.len(), "GET");
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }
}
