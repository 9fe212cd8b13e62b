//! # Blogly Core
//!
//! The domain layer of Blogly: users own posts, posts carry tags.
//! This crate contains the entity types, the repository ports and the
//! [`EntityStore`] handle every HTTP handler goes through. It has zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::DomainError;
pub use store::EntityStore;
