//! Domain-level error types.

use thiserror::Error;

/// Domain errors - what the entity store reports to its callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: i32) -> Self {
        Self::NotFound { entity_type, id }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// Attach the entity the failed operation was addressing.
    ///
    /// `constraint` is the caller-facing description used when the write
    /// broke a uniqueness rule.
    pub fn for_entity(self, entity_type: &'static str, id: i32, constraint: &str) -> DomainError {
        match self {
            RepoError::NotFound => DomainError::not_found(entity_type, id),
            RepoError::Constraint(_) => DomainError::ConstraintViolation(constraint.to_string()),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Used where the operation addresses no particular id (listings).
impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::ConstraintViolation(msg),
            other => DomainError::Internal(other.to_string()),
        }
    }
}
