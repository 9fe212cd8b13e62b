//! SeaORM repository implementations.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr,
    EntityTrait, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};

use blogly_core::EntityStore;
use blogly_core::domain::{Post, PostDraft, Tag, TagDraft, User, UserDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::{post, post_tag, tag, user};
use super::errors::map_db_err;
use super::sea_base::SeaRepository;

/// SeaORM user repository.
pub type SeaUserRepository = SeaRepository<user::Entity>;

/// SeaORM post repository.
pub type SeaPostRepository = SeaRepository<post::Entity>;

/// SeaORM tag repository.
pub type SeaTagRepository = SeaRepository<tag::Entity>;

/// Wire the SeaORM repositories over one connection pool into an [`EntityStore`].
pub fn build_store(db: DbConn) -> EntityStore {
    EntityStore::new(
        Arc::new(SeaUserRepository::new(db.clone())),
        Arc::new(SeaPostRepository::new(db.clone())),
        Arc::new(SeaTagRepository::new(db)),
    )
}

#[async_trait]
impl UserRepository for SeaUserRepository {
    async fn list_by_name(&self) -> Result<Vec<User>, RepoError> {
        let result = user::Entity::find()
            .order_by_asc(user::Column::FirstName)
            .order_by_asc(user::Column::LastName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: UserDraft) -> Result<User, RepoError> {
        let mut model = user::ActiveModel::new();
        model.apply(draft);

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(saved.into())
    }

    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut model = user::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?
            .into_active_model();
        model.apply(draft);

        let saved = model.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(saved.into())
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::PostTag.def())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, user_id: i32, draft: PostDraft) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if user::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .is_none()
        {
            return Err(RepoError::NotFound);
        }

        let model = post::ActiveModel {
            user_id: Set(user_id),
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let saved = model.insert(&txn).await.map_err(map_db_err)?;

        replace_post_tags(&txn, saved.id, &draft.tag_ids)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = saved.id, user_id, "Post inserted");
        Ok(saved.into())
    }

    async fn update(&self, id: i32, draft: PostDraft) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut model = post::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?
            .into_active_model();
        model.title = Set(draft.title);
        model.content = Set(draft.content);

        let saved = model.update(&txn).await.map_err(map_db_err)?;
        replace_post_tags(&txn, id, &draft.tag_ids)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(saved.into())
    }
}

#[async_trait]
impl TagRepository for SeaTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let result = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_posts(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .join(JoinType::InnerJoin, post::Relation::PostTag.def())
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: TagDraft) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = tag::ActiveModel {
            name: Set(draft.name),
            ..Default::default()
        };
        let saved = model.insert(&txn).await.map_err(map_db_err)?;

        replace_tag_posts(&txn, saved.id, &draft.post_ids)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(tag_id = saved.id, "Tag inserted");
        Ok(saved.into())
    }

    async fn update(&self, id: i32, draft: TagDraft) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut model = tag::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?
            .into_active_model();
        model.name = Set(draft.name);

        let saved = model.update(&txn).await.map_err(map_db_err)?;
        replace_tag_posts(&txn, id, &draft.post_ids)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(saved.into())
    }
}

/// Replace every link of `post_id` with links to whichever `tag_ids` exist.
async fn replace_post_tags<C>(conn: &C, post_id: i32, tag_ids: &[i32]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    post_tag::Entity::delete_many()
        .filter(post_tag::Column::PostId.eq(post_id))
        .exec(conn)
        .await?;

    let tag_ids = existing_ids::<tag::Entity, _>(conn, tag::Column::Id, tag_ids).await?;
    insert_links(conn, tag_ids.into_iter().map(|tag_id| (post_id, tag_id))).await
}

/// Replace every link of `tag_id` with links to whichever `post_ids` exist.
async fn replace_tag_posts<C>(conn: &C, tag_id: i32, post_ids: &[i32]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    post_tag::Entity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;

    let post_ids = existing_ids::<post::Entity, _>(conn, post::Column::Id, post_ids).await?;
    insert_links(conn, post_ids.into_iter().map(|post_id| (post_id, tag_id))).await
}

/// The subset of `ids` present in `column`, deduplicated.
async fn existing_ids<E, C>(conn: &C, column: E::Column, ids: &[i32]) -> Result<Vec<i32>, DbErr>
where
    E: EntityTrait,
    E::Column: Copy,
    C: ConnectionTrait,
{
    let wanted: BTreeSet<i32> = ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    let found: Vec<i32> = E::find()
        .select_only()
        .column(column)
        .filter(column.is_in(wanted.iter().copied()))
        .into_tuple()
        .all(conn)
        .await?;

    if found.len() < wanted.len() {
        tracing::debug!(
            requested = wanted.len(),
            found = found.len(),
            "Dropping unknown ids from association"
        );
    }

    Ok(found)
}

async fn insert_links<C, I>(conn: &C, pairs: I) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = (i32, i32)>,
{
    let rows: Vec<post_tag::ActiveModel> = pairs
        .into_iter()
        .map(|(post_id, tag_id)| post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        })
        .collect();

    if rows.is_empty() {
        return Ok(());
    }

    post_tag::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
