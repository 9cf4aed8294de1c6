use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used by the public API: `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for inserting a post. The store assigns `id` and `created`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewBlogPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
        }
    }

    /// Reject blank required fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("title", &self.title),
            ("content", &self.content),
            ("author.firstName", &self.author.first_name),
            ("author.lastName", &self.author.last_name),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("`{}` is required", field)));
            }
        }

        Ok(())
    }
}

/// Blog post entity - a persisted post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Materialize a new post with a fresh id and creation timestamp.
    ///
    /// The timestamp is truncated to microseconds so it survives a round-trip
    /// through `TIMESTAMPTZ` unchanged.
    pub fn from_new(new: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply a partial update. Only `title` and `content` are mutable.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Partial update of a post; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// A supplied field must not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation("`title` cannot be empty".to_string()));
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(DomainError::Validation(
                "`content` cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewBlogPost {
        NewBlogPost::new("Title", "Body", Author::new("Ada", "Lovelace"))
    }

    #[test]
    fn test_full_name_joins_with_single_space() {
        let author = Author::new("Ada", "Lovelace");
        assert_eq!(author.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_author_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(Author::new("F", "L")).unwrap();
        assert_eq!(json, serde_json::json!({ "firstName": "F", "lastName": "L" }));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(sample().validate().is_ok());

        let mut post = sample();
        post.title = "   ".to_string();
        assert!(matches!(post.validate(), Err(DomainError::Validation(_))));

        let mut post = sample();
        post.author.last_name = String::new();
        let err = post.validate().unwrap_err();
        assert!(err.to_string().contains("author.lastName"));
    }

    #[test]
    fn test_from_new_assigns_id_and_timestamp() {
        let a = BlogPost::from_new(sample());
        let b = BlogPost::from_new(sample());

        assert_ne!(a.id, b.id);
        assert_eq!(a.created.timestamp_subsec_nanos() % 1_000, 0);
        assert_eq!(a.title, "Title");
        assert_eq!(a.author, Author::new("Ada", "Lovelace"));
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut post = BlogPost::from_new(sample());
        let before = post.clone();

        post.apply(BlogPostPatch {
            title: Some("New".to_string()),
            content: None,
        });

        assert_eq!(post.title, "New");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.created, before.created);
        assert_eq!(post.id, before.id);
    }

    #[test]
    fn test_patch_validation() {
        assert!(BlogPostPatch::default().is_empty());
        assert!(BlogPostPatch::default().validate().is_ok());

        let patch = BlogPostPatch {
            title: None,
            content: Some(String::new()),
        };
        assert!(!patch.is_empty());
        assert!(patch.validate().is_err());
    }
}
