use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, User};

/// Format of [`Post::friendly_date`], e.g. `Mon Jan 5 2024, 3:04 PM`.
const FRIENDLY_DATE_FORMAT: &str = "%a %b %-d %Y, %-I:%M %p";

/// Post entity - a blog post written by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Human-readable creation date. Computed on read, never stored.
    pub fn friendly_date(&self) -> String {
        self.created_at.format(FRIENDLY_DATE_FORMAT).to_string()
    }
}

/// Field values for creating or overwriting a post.
///
/// `tag_ids` that match no existing tag are dropped silently by the store,
/// unlike a missing post or user which is reported as not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

/// A post together with its owner and current tag set.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post_at(created_at: DateTime<Utc>) -> Post {
        Post {
            id: 1,
            user_id: 1,
            title: "Good Morning Team Z!".into(),
            content: "This is my post".into(),
            created_at,
        }
    }

    #[test]
    fn friendly_date_drops_leading_zeros() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(post_at(at).friendly_date(), "Fri Jan 5 2024, 3:04 PM");
    }

    #[test]
    fn friendly_date_morning() {
        let at = Utc.with_ymd_and_hms(2023, 11, 20, 9, 30, 0).unwrap();
        assert_eq!(post_at(at).friendly_date(), "Mon Nov 20 2023, 9:30 AM");
    }
}
