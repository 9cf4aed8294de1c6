use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait shared by every id-addressable record type.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find a record by its unique ID. `Ok(None)` means absent.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete a record by its ID. Fails with [`RepoError::NotFound`] if absent.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Blog post store.
///
/// Implementations own all persisted state and must apply each single-record
/// write atomically.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Insert one post; the store assigns `id` and `created`.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Bulk insert, used for seeding.
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// All posts, oldest first (ties broken by id).
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The oldest post, if any.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Apply a partial update and return the stored result.
    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Remove every post, returning how many were dropped.
    async fn clear(&self) -> Result<u64, RepoError>;
}
