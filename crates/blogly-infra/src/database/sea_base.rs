use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait, PrimaryKeyTrait};

use blogly_core::error::RepoError;
use blogly_core::ports::BaseRepository;

use super::errors::map_db_err;

/// Generic SeaORM repository implementation.
pub struct SeaRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SeaRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Copy + std::fmt::Debug + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        tracing::debug!(table = E::default().table_name(), ?id, "Finding by id");

        let result = E::find_by_id(id).one(&self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    /// Dependent rows (a user's posts, a post's or tag's links) are removed
    /// by the `ON DELETE CASCADE` foreign keys in the same statement.
    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(table = E::default().table_name(), ?id, "Deleted");
        Ok(())
    }
}
