//! Serializable shapes handed to the templates.

use blogly_core::domain::Post;
use serde::Serialize;

/// A post plus its derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub friendly_date: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at.to_rfc3339(),
            friendly_date: post.friendly_date(),
        }
    }
}

pub fn post_views(posts: &[Post]) -> Vec<PostView> {
    posts.iter().map(PostView::from).collect()
}
