//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};

/// Author name parts as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorRequest,
}

/// Request to update a post. Omitted fields are left unchanged.
///
/// `id` is optional; when present it must match the id in the path.
/// Any other keys (`author`, `created`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `"firstName lastName"`
    pub author: String,
    /// RFC 3339, UTC.
    pub created: String,
}
