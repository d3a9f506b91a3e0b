//! Unified error types for the domain layer
//!
//! Provides the error types shared by every guide operation, so adapters never
//! have to fall back to `String` or `anyhow` for domain failures.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An entity invariant does not hold
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected input.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for DifficultyBucket {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "easy" => Ok(Self::Easy),
    ///             _ => Err(DomainError::parse(format!("Unknown difficulty: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Client-side required-field check failure for a custom build draft.
///
/// Lists every missing field (by wire name) in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn missing_fields(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|f| *f == field)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
