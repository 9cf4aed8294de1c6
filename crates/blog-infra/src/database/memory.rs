//! In-memory post store - used when no database is configured and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Every write takes the write lock, so single-record operations are atomic.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    fn sorted(posts: &HashMap<Uuid, BlogPost>) -> Vec<BlogPost> {
        let mut all: Vec<BlogPost> = posts.values().cloned().collect();
        all.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.len() as u64)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_new(post);
        let mut posts = self.posts.write().await;

        if posts.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!("duplicate id {}", post.id)));
        }
        posts.insert(post.id, post.clone());

        tracing::debug!(post_id = %post.id, "Inserted blog post");
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let records: Vec<BlogPost> = posts.into_iter().map(BlogPost::from_new).collect();
        let mut store = self.posts.write().await;

        for record in &records {
            store.insert(record.id, record.clone());
        }

        tracing::debug!(count = records.len(), "Inserted blog posts");
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(Self::sorted(&posts))
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .min_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)))
            .cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(patch);

        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(post.clone())
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let dropped = posts.len() as u64;
        posts.clear();
        Ok(dropped)
    }
}

#[cfg(test)]
mod tests {
    use blog_core::domain::Author;

    use super::*;

    fn new_post(n: usize) -> NewBlogPost {
        NewBlogPost::new(
            format!("Post {}", n),
            format!("Content of post {}", n),
            Author::new(format!("First{}", n), format!("Last{}", n)),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = InMemoryBlogPostRepository::new();
        let created = repo.insert(new_post(1)).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.author.first_name, "First1");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_matches_count() {
        let repo = InMemoryBlogPostRepository::new();
        repo.insert_many((1..=10).map(new_post).collect())
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len() as u64, repo.count().await.unwrap());
        assert_eq!(all.len(), 10);
        assert!(all.windows(2).all(|w| w[0].created <= w[1].created));
    }

    #[tokio::test]
    async fn test_find_one_returns_first_of_find_all() {
        let repo = InMemoryBlogPostRepository::new();
        assert!(repo.find_one().await.unwrap().is_none());

        repo.insert_many((1..=3).map(new_post).collect())
            .await
            .unwrap();

        let first = repo.find_one().await.unwrap().unwrap();
        assert_eq!(first, repo.find_all().await.unwrap()[0]);
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.insert(new_post(1)).await.unwrap();

        let patch = BlogPostPatch {
            title: Some("Updated".to_string()),
            content: None,
        };
        let updated = repo.update_by_id(post.id, patch).await.unwrap();

        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.author, post.author);
        assert_eq!(updated.created, post.created);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = InMemoryBlogPostRepository::new();
        let result = repo
            .update_by_id(Uuid::new_v4(), BlogPostPatch::default())
            .await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_lookup_is_absent() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.insert(new_post(1)).await.unwrap();

        repo.delete_by_id(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());

        // Deleted is terminal.
        assert!(matches!(
            repo.delete_by_id(post.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = InMemoryBlogPostRepository::new();
        repo.insert_many((1..=4).map(new_post).collect())
            .await
            .unwrap();

        assert_eq!(repo.clear().await.unwrap(), 4);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
