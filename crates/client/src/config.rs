//! Client configuration from the environment.

use std::time::Duration;

/// Default guide service address.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const BACKEND_URL_ENV: &str = "NIGHTREIGN_BACKEND_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "NIGHTREIGN_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub backend_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(backend_url: &str, request_timeout_ms: u64) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(request_timeout_ms),
        }
    }

    /// Create config from environment variables.
    ///
    /// Uses `NIGHTREIGN_BACKEND_URL` and `NIGHTREIGN_REQUEST_TIMEOUT_MS`,
    /// falling back to defaults if unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup(BACKEND_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let timeout_ms = match lookup(REQUEST_TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid {}, using default", REQUEST_TIMEOUT_ENV);
                DEFAULT_REQUEST_TIMEOUT_MS
            }),
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Self::new(backend_url.trim(), timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_MS)
    }
}
