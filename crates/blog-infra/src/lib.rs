//! # Blog Infrastructure
//!
//! Concrete implementations of the store ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! Building with `--no-default-features` leaves only the in-memory store.

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DbPool, PostgresBlogPostRepository};
