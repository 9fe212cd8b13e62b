//! Database connection management and SeaORM repositories.

mod connections;
mod errors;
mod sea_base;
pub mod sea_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect, ping};
pub use sea_repo::{SeaPostRepository, SeaTagRepository, SeaUserRepository, build_store};

#[cfg(test)]
mod tests;
