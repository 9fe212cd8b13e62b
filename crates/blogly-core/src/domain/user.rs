use serde::{Deserialize, Serialize};

/// Placeholder avatar stored when a user gives no image.
pub const DEFAULT_IMAGE_URL: &str = "https://www.freeiconspng.com/uploads/icon-user-blue-symbol-people-person-generic--public-domain--21.png";

/// User entity - an author who owns posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field values for creating or overwriting a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserDraft {
    /// Build a draft, falling back to [`DEFAULT_IMAGE_URL`] when the image is
    /// absent or blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        let image_url = image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_url_falls_back_to_default() {
        let draft = UserDraft::new("Ariel", "Waters", Some(String::new()));
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);

        let draft = UserDraft::new("Ariel", "Waters", Some("   ".into()));
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);

        let draft = UserDraft::new("Ariel", "Waters", None);
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn supplied_image_url_is_kept() {
        let draft = UserDraft::new("Ariel", "Waters", Some("https://img.test/a.png".into()));
        assert_eq!(draft.image_url, "https://img.test/a.png");
    }

    #[test]
    fn full_name_joins_both_parts() {
        let user = User {
            id: 1,
            first_name: "Ariel".into(),
            last_name: "Waters".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.full_name(), "Ariel Waters");
    }
}
