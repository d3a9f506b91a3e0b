//! HTTP boundary error type

use thiserror::Error;

/// Errors raised at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: service unreachable, connection reset, timeout
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// True when the service could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}
