//! # Blog Shared
//!
//! Wire types shared by the server and API clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
