use serde::{Deserialize, Serialize};

use super::Post;

/// Tag entity - a globally unique label attached to posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Field values for creating or overwriting a tag.
///
/// `post_ids` that match no existing post are dropped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
    pub post_ids: Vec<i32>,
}

/// A tag together with the posts carrying it.
#[derive(Debug, Clone)]
pub struct TagDetail {
    pub tag: Tag,
    pub posts: Vec<Post>,
}
