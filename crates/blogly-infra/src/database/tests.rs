use blogly_core::domain::{DEFAULT_IMAGE_URL, Post, PostDraft, TagDraft, UserDraft};
use blogly_core::ports::BaseRepository;
use blogly_core::{DomainError, EntityStore};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbConn, EntityTrait,
    MockDatabase,
};

use crate::database::entity::{post, post_tag};
use crate::database::sea_repo::{SeaPostRepository, build_store};

async fn sqlite() -> DbConn {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    db.execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn store() -> (EntityStore, DbConn) {
    let db = sqlite().await;
    (build_store(db.clone()), db)
}

fn user(first: &str, last: &str) -> UserDraft {
    UserDraft::new(first, last, None)
}

fn post_draft(title: &str, tag_ids: Vec<i32>) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: "This is my post".to_string(),
        tag_ids,
    }
}

fn tag_draft(name: &str, post_ids: Vec<i32>) -> TagDraft {
    TagDraft {
        name: name.to_string(),
        post_ids,
    }
}

fn tag_names(tags: &[blogly_core::domain::Tag]) -> Vec<&str> {
    tags.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test]
async fn test_find_post_by_id_maps_model() {
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 3,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            user_id: 9,
        }]])
        .into_connection();

    let repo = SeaPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(3).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, 3);
    assert_eq!(post.user_id, 9);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.created_at, now);
}

#[tokio::test]
async fn test_list_users_sorted_by_first_then_last_name() {
    let (store, _db) = store().await;
    assert!(store.list_users().await.unwrap().is_empty());

    store.create_user(user("Zed", "Alpha")).await.unwrap();
    store.create_user(user("Ariel", "Waters")).await.unwrap();
    store.create_user(user("Bob", "Barker")).await.unwrap();

    let users = store.list_users().await.unwrap();
    let names: Vec<String> = users.iter().map(|u| u.full_name()).collect();
    assert_eq!(names, vec!["Ariel Waters", "Bob Barker", "Zed Alpha"]);

    store.create_user(user("Carla", "Diaz")).await.unwrap();
    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(users[2].first_name, "Carla");
}

#[tokio::test]
async fn test_duplicate_first_name_is_rejected() {
    let (store, _db) = store().await;
    store.create_user(user("Ariel", "Waters")).await.unwrap();

    let err = store.create_user(user("Ariel", "Jones")).await.unwrap_err();
    assert!(matches!(err, DomainError::ConstraintViolation(_)));

    let err = store.create_user(user("Maya", "Waters")).await.unwrap_err();
    assert!(matches!(err, DomainError::ConstraintViolation(_)));

    assert_eq!(store.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_image_url_stores_default() {
    let (store, _db) = store().await;

    let created = store
        .create_user(UserDraft::new("Ariel", "Waters", Some(String::new())))
        .await
        .unwrap();
    let fetched = store.get_user(created.id).await.unwrap();
    assert_eq!(fetched.image_url, DEFAULT_IMAGE_URL);
}

#[tokio::test]
async fn test_update_user_overwrites_fields() {
    let (store, _db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let bob = store.create_user(user("Bob", "Barker")).await.unwrap();

    let updated = store
        .update_user(
            ariel.id,
            UserDraft::new("Ari", "Walters", Some("https://img.test/a.png".into())),
        )
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Ari");
    assert_eq!(updated.image_url, "https://img.test/a.png");

    // Keeping one's own names is not a collision.
    store
        .update_user(bob.id, user("Bob", "Barker"))
        .await
        .unwrap();

    let err = store
        .update_user(bob.id, user("Ari", "Barker"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ConstraintViolation(_)));

    let err = store.update_user(999, user("New", "Name")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "User", id: 999 }));
}

#[tokio::test]
async fn test_create_post_keeps_only_existing_tags() {
    let (store, _db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let fun = store.create_tag(tag_draft("Fun", vec![])).await.unwrap();
    let work = store.create_tag(tag_draft("Work", vec![])).await.unwrap();

    let post = store
        .create_post(ariel.id, post_draft("Hello", vec![fun.id, 404, work.id, fun.id]))
        .await
        .unwrap();

    let detail = store.get_post(post.id).await.unwrap();
    assert_eq!(detail.author.id, ariel.id);
    assert_eq!(tag_names(&detail.tags), vec!["Fun", "Work"]);
}

#[tokio::test]
async fn test_create_post_for_missing_user_is_not_found() {
    let (store, _db) = store().await;

    let err = store
        .create_post(42, post_draft("Orphan", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "User", id: 42 }));
    assert!(store.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_post_replaces_tag_set() {
    let (store, db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let a = store.create_tag(tag_draft("A", vec![])).await.unwrap();
    let b = store.create_tag(tag_draft("B", vec![])).await.unwrap();
    let c = store.create_tag(tag_draft("C", vec![])).await.unwrap();

    let post = store
        .create_post(ariel.id, post_draft("Tagged", vec![a.id, b.id]))
        .await
        .unwrap();

    let updated = store
        .update_post(
            post.id,
            PostDraft {
                title: "Retagged".into(),
                content: "New content".into(),
                tag_ids: vec![b.id, c.id],
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Retagged");
    assert_eq!(updated.created_at, post.created_at);

    let detail = store.get_post(post.id).await.unwrap();
    assert_eq!(tag_names(&detail.tags), vec!["B", "C"]);
    assert_eq!(detail.post.content, "New content");

    let links = post_tag::Entity::find().all(&db).await.unwrap();
    assert_eq!(links.len(), 2);

    let err = store
        .update_post(999, post_draft("Missing", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Post", id: 999 }));
}

#[tokio::test]
async fn test_delete_tag_removes_links() {
    let (store, db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let tag = store.create_tag(tag_draft("Team Z", vec![])).await.unwrap();
    let keep = store.create_tag(tag_draft("Keep", vec![])).await.unwrap();
    let post = store
        .create_post(ariel.id, post_draft("Morning", vec![tag.id, keep.id]))
        .await
        .unwrap();

    store.delete_tag(tag.id).await.unwrap();

    let detail = store.get_post(post.id).await.unwrap();
    assert_eq!(tag_names(&detail.tags), vec!["Keep"]);
    let links = post_tag::Entity::find().all(&db).await.unwrap();
    assert_eq!(links.len(), 1);

    let err = store.get_tag(tag.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Tag", .. }));
    let err = store.delete_tag(tag.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_tag_post_sets_and_name_uniqueness() {
    let (store, _db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let first = store
        .create_post(ariel.id, post_draft("First", vec![]))
        .await
        .unwrap();
    let second = store
        .create_post(ariel.id, post_draft("Second", vec![]))
        .await
        .unwrap();

    let tag = store
        .create_tag(tag_draft("Rust", vec![first.id, 77]))
        .await
        .unwrap();
    let detail = store.get_tag(tag.id).await.unwrap();
    assert_eq!(detail.posts.len(), 1);
    assert_eq!(detail.posts[0].id, first.id);

    let updated = store
        .update_tag(tag.id, tag_draft("Rustacean", vec![second.id]))
        .await
        .unwrap();
    assert_eq!(updated.name, "Rustacean");
    let detail = store.get_tag(tag.id).await.unwrap();
    let ids: Vec<i32> = detail.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id]);

    store.create_tag(tag_draft("Go", vec![])).await.unwrap();
    let err = store.create_tag(tag_draft("Go", vec![])).await.unwrap_err();
    assert!(matches!(err, DomainError::ConstraintViolation(_)));
    let err = store
        .update_tag(tag.id, tag_draft("Go", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ConstraintViolation(_)));

    // The failed rename left the tag and its posts untouched.
    let detail = store.get_tag(tag.id).await.unwrap();
    assert_eq!(detail.tag.name, "Rustacean");
    assert_eq!(detail.posts.len(), 1);

    let names: Vec<String> = store
        .list_tags()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Go", "Rustacean"]);
}

#[tokio::test]
async fn test_delete_post_returns_owner_and_drops_links() {
    let (store, db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let tag = store.create_tag(tag_draft("Fun", vec![])).await.unwrap();
    let post = store
        .create_post(ariel.id, post_draft("Bye", vec![tag.id]))
        .await
        .unwrap();

    let deleted = store.delete_post(post.id).await.unwrap();
    assert_eq!(deleted.user_id, ariel.id);

    assert!(post_tag::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(store.get_tag(tag.id).await.unwrap().posts.is_empty());

    let err = store.get_post(post.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Post", .. }));
    let err = store.delete_post(post.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_user_cascades_to_posts() {
    let (store, db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let bob = store.create_user(user("Bob", "Barker")).await.unwrap();
    let tag = store.create_tag(tag_draft("Fun", vec![])).await.unwrap();
    let gone = store
        .create_post(ariel.id, post_draft("Gone", vec![tag.id]))
        .await
        .unwrap();
    let kept = store
        .create_post(bob.id, post_draft("Kept", vec![tag.id]))
        .await
        .unwrap();

    store.delete_user(ariel.id).await.unwrap();

    assert!(matches!(
        store.get_user(ariel.id).await.unwrap_err(),
        DomainError::NotFound { entity_type: "User", .. }
    ));
    assert!(matches!(
        store.get_post(gone.id).await.unwrap_err(),
        DomainError::NotFound { entity_type: "Post", .. }
    ));
    let posts = store.list_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, kept.id);

    let tagged = store.get_tag(tag.id).await.unwrap().posts;
    assert_eq!(tagged.len(), 1);
    assert_eq!(post_tag::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_posts_lists_owned_posts() {
    let (store, _db) = store().await;
    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let bob = store.create_user(user("Bob", "Barker")).await.unwrap();
    store
        .create_post(ariel.id, post_draft("One", vec![]))
        .await
        .unwrap();
    store
        .create_post(bob.id, post_draft("Other", vec![]))
        .await
        .unwrap();
    store
        .create_post(ariel.id, post_draft("Two", vec![]))
        .await
        .unwrap();

    let titles: Vec<String> = store
        .user_posts(ariel.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["One", "Two"]);

    assert!(matches!(
        store.user_posts(12345).await.unwrap_err(),
        DomainError::NotFound { entity_type: "User", id: 12345 }
    ));
}

#[tokio::test]
async fn test_lookups_of_unknown_ids_are_not_found() {
    let (store, _db) = store().await;

    assert!(matches!(
        store.get_user(1).await.unwrap_err(),
        DomainError::NotFound { entity_type: "User", id: 1 }
    ));
    assert!(matches!(
        store.get_post(1).await.unwrap_err(),
        DomainError::NotFound { entity_type: "Post", id: 1 }
    ));
    assert!(matches!(
        store.get_tag(1).await.unwrap_err(),
        DomainError::NotFound { entity_type: "Tag", id: 1 }
    ));
    assert!(matches!(
        store.delete_user(1).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_team_z_scenario() {
    let (store, _db) = store().await;

    let ariel = store.create_user(user("Ariel", "Waters")).await.unwrap();
    let post = store
        .create_post(
            ariel.id,
            PostDraft {
                title: "Good Morning Team Z!".into(),
                content: "This is my post".into(),
                tag_ids: vec![],
            },
        )
        .await
        .unwrap();
    let tag = store.create_tag(tag_draft("Team Z", vec![])).await.unwrap();

    let users = store.list_users().await.unwrap();
    assert!(users.iter().any(|u| u.first_name == "Ariel" && u.last_name == "Waters"));

    let detail = store.get_post(post.id).await.unwrap();
    assert_eq!(detail.author.full_name(), "Ariel Waters");
    assert!(detail.tags.is_empty());

    let tags = store.list_tags().await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Team Z");
    assert!(store.get_tag(tag.id).await.unwrap().posts.is_empty());
}
