//! Demo content for a fresh database.

use blogly_core::domain::{PostDraft, TagDraft, UserDraft};
use blogly_core::{DomainError, EntityStore};

const ARIEL_IMAGE_URL: &str =
    "https://www.freeiconspng.com/uploads/face-head-woman-female-icon-23.png";

/// Insert Ariel Waters, her first post and the "Team Z" tag.
///
/// Does nothing when any user already exists.
pub async fn seed_demo_data(store: &EntityStore) -> Result<bool, DomainError> {
    if !store.list_users().await?.is_empty() {
        tracing::debug!("Users present, skipping demo data");
        return Ok(false);
    }

    let ariel = store
        .create_user(UserDraft::new(
            "Ariel",
            "Waters",
            Some(ARIEL_IMAGE_URL.to_string()),
        ))
        .await?;
    store
        .create_post(
            ariel.id,
            PostDraft {
                title: "Good Morning Team Z!".to_string(),
                content: "This is my post".to_string(),
                tag_ids: Vec::new(),
            },
        )
        .await?;
    store
        .create_tag(TagDraft {
            name: "Team Z".to_string(),
            post_ids: Vec::new(),
        })
        .await?;

    tracing::info!("Demo data seeded");
    Ok(true)
}
