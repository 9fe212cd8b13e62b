//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::EntityStore;
use blogly_infra::{DatabaseConfig, DbConn, build_store, connect};
use migration::{Migrator, MigratorTrait};
use thiserror::Error;

use crate::templates::Templates;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(#[from] blogly_infra::DbErr),

    #[error("template loading failed: {0}")]
    Templates(#[from] tera::Error),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
    pub templates: Arc<Templates>,
    pub db: DbConn,
}

impl AppState {
    /// Connect, optionally migrate, and wire the store over the pool.
    pub async fn new(config: &DatabaseConfig, auto_migrate: bool) -> Result<Self, StartupError> {
        let db = connect(config).await?;

        if auto_migrate {
            Migrator::up(&db, None).await?;
            tracing::info!("Database migrations applied");
        }

        let state = Self::from_connection(db)?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Build state over an already open (and migrated) connection.
    pub fn from_connection(db: DbConn) -> Result<Self, StartupError> {
        Ok(Self {
            store: build_store(db.clone()),
            templates: Arc::new(Templates::load()?),
            db,
        })
    }
}
