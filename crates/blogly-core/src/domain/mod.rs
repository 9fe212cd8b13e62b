//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{Post, PostDetail, PostDraft};
pub use tag::{Tag, TagDetail, TagDraft};
pub use user::{DEFAULT_IMAGE_URL, User, UserDraft};
