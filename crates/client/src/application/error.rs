//! Service layer error types

use thiserror::Error;

use nightreign_domain::ValidationError;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Transport failure, non-success status, or malformed response
    #[error("Network error: {0}")]
    Network(#[from] ApiError),

    /// Client-side required-field check failed; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_not_found())
    }
}
