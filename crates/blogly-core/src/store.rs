//! Entity store - the query/mutation layer used by every HTTP handler.

use std::sync::Arc;

use crate::domain::{Post, PostDetail, PostDraft, Tag, TagDetail, TagDraft, User, UserDraft};
use crate::error::DomainError;
use crate::ports::{PostRepository, TagRepository, UserRepository};

const USER_NAME_TAKEN: &str = "first name and last name must each be unique across users";
const TAG_NAME_TAKEN: &str = "tag name is already in use";

/// Handle over the user, post and tag repositories.
///
/// Built once at startup (or per test fixture) and passed to whoever needs
/// storage. Every mutation commits atomically or leaves the store unchanged.
///
/// Collections of referenced ids (`tag_ids` on a post, `post_ids` on a tag)
/// are filtered to the ids that exist; unknown ids are ignored rather than
/// reported, unlike direct lookups which fail with
/// [`DomainError::NotFound`].
#[derive(Clone)]
pub struct EntityStore {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
}

impl EntityStore {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self { users, posts, tags }
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.list_by_name().await?)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<User, DomainError> {
        let user = self
            .users
            .insert(draft)
            .await
            .map_err(|e| e.for_entity("User", 0, USER_NAME_TAKEN))?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update_user(&self, id: i32, draft: UserDraft) -> Result<User, DomainError> {
        self.users
            .update(id, draft)
            .await
            .map_err(|e| e.for_entity("User", id, USER_NAME_TAKEN))
    }

    /// Delete a user. Their posts, and those posts' tag links, go with them.
    pub async fn delete_user(&self, id: i32) -> Result<(), DomainError> {
        self.users
            .delete(id)
            .await
            .map_err(|e| e.for_entity("User", id, USER_NAME_TAKEN))?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Posts owned by a user, oldest first.
    pub async fn user_posts(&self, id: i32) -> Result<Vec<Post>, DomainError> {
        self.get_user(id).await?;
        Ok(self.posts.find_by_user_id(id).await?)
    }

    // Posts

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list().await?)
    }

    pub async fn get_post(&self, id: i32) -> Result<PostDetail, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))?;
        let author = self.get_user(post.user_id).await?;
        let tags = self.posts.find_tags(id).await?;

        Ok(PostDetail { post, author, tags })
    }

    /// Create a post for `user_id`, attaching whichever of `draft.tag_ids`
    /// exist.
    pub async fn create_post(&self, user_id: i32, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .posts
            .insert(user_id, draft)
            .await
            .map_err(|e| e.for_entity("User", user_id, "post rejected by a database constraint"))?;
        tracing::info!(post_id = post.id, user_id, "Post created");
        Ok(post)
    }

    /// Overwrite a post and replace its tag set with whichever of
    /// `draft.tag_ids` exist.
    pub async fn update_post(&self, id: i32, draft: PostDraft) -> Result<Post, DomainError> {
        self.posts
            .update(id, draft)
            .await
            .map_err(|e| e.for_entity("Post", id, "post rejected by a database constraint"))
    }

    /// Delete a post and its tag links. Returns the deleted post.
    pub async fn delete_post(&self, id: i32) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))?;
        self.posts
            .delete(id)
            .await
            .map_err(|e| e.for_entity("Post", id, "post rejected by a database constraint"))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(post)
    }

    // Tags

    pub async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.list().await?)
    }

    pub async fn get_tag(&self, id: i32) -> Result<TagDetail, DomainError> {
        let tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tag", id))?;
        let posts = self.tags.find_posts(id).await?;

        Ok(TagDetail { tag, posts })
    }

    /// Create a tag, attaching whichever of `draft.post_ids` exist.
    pub async fn create_tag(&self, draft: TagDraft) -> Result<Tag, DomainError> {
        let tag = self
            .tags
            .insert(draft)
            .await
            .map_err(|e| e.for_entity("Tag", 0, TAG_NAME_TAKEN))?;
        tracing::info!(tag_id = tag.id, "Tag created");
        Ok(tag)
    }

    /// Rename a tag and replace its post set with whichever of
    /// `draft.post_ids` exist.
    pub async fn update_tag(&self, id: i32, draft: TagDraft) -> Result<Tag, DomainError> {
        self.tags
            .update(id, draft)
            .await
            .map_err(|e| e.for_entity("Tag", id, TAG_NAME_TAKEN))
    }

    pub async fn delete_tag(&self, id: i32) -> Result<(), DomainError> {
        self.tags
            .delete(id)
            .await
            .map_err(|e| e.for_entity("Tag", id, TAG_NAME_TAKEN))?;
        tracing::info!(tag_id = id, "Tag deleted");
        Ok(())
    }
}
