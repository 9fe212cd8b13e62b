//! # Blogly Shared
//!
//! Request and response shapes shared by the HTTP layer: the urlencoded
//! form DTOs and the RFC 7807 error body.

pub mod dto;
pub mod response;

pub use dto::{FormError, FormFields, NAME_MAX_CHARS, PostForm, TagForm, UserForm};
pub use response::ErrorResponse;
