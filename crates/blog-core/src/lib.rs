//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate contains the post model, error types and storage ports with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
