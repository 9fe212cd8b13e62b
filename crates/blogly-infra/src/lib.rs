//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`:
//! SeaORM entities for `users`, `posts`, `tags` and `posts_tags`, the
//! repositories built on them, and connection setup. PostgreSQL and SQLite
//! URLs are both accepted.

pub mod database;

pub use database::{DatabaseConfig, build_store, connect, ping};
pub use sea_orm::{DbConn, DbErr};
