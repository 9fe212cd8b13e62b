use async_trait::async_trait;

use crate::domain::{Post, PostDraft, Tag, TagDraft, User, UserDraft};
use crate::error::RepoError;

/// Generic repository trait shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, together with every row that depends on it.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// All users ordered by first name, then last name.
    async fn list_by_name(&self) -> Result<Vec<User>, RepoError>;

    async fn insert(&self, draft: UserDraft) -> Result<User, RepoError>;

    /// Overwrite all fields of an existing user.
    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Tags currently attached to a post, ordered by name.
    async fn find_tags(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Insert a post owned by `user_id`. Fails with `NotFound` when the user
    /// does not exist; unknown tag ids are skipped.
    async fn insert(&self, user_id: i32, draft: PostDraft) -> Result<Post, RepoError>;

    /// Overwrite title and content and replace the whole tag set.
    async fn update(&self, id: i32, draft: PostDraft) -> Result<Post, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    /// All tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, RepoError>;

    /// Posts currently carrying a tag, ordered by id.
    async fn find_posts(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Insert a tag; unknown post ids are skipped.
    async fn insert(&self, draft: TagDraft) -> Result<Tag, RepoError>;

    /// Overwrite the name and replace the whole post set.
    async fn update(&self, id: i32, draft: TagDraft) -> Result<Tag, RepoError>;
}
