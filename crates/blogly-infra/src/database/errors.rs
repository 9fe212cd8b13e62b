//! Mapping from SeaORM errors to repository errors.

use sea_orm::{DbErr, SqlErr};

use blogly_core::error::RepoError;

/// Classify a database error.
///
/// Unique violations become `Constraint`; a foreign key violation means the
/// referenced row is gone, which callers see as `NotFound`.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Write rejected by unique constraint");
            RepoError::Constraint(detail)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Write rejected by foreign key constraint");
            RepoError::NotFound
        }
        _ => match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        },
    }
}
