//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active: blog_post::ActiveModel = BlogPost::from_new(post).into();
        let model = active.insert(self.db.as_ref()).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<BlogPost> = posts.into_iter().map(BlogPost::from_new).collect();
        let models = records.iter().cloned().map(blog_post::ActiveModel::from);

        BlogPostEntity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = records.len(), "Inserted blog posts");
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let existing = BlogPostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if patch.is_empty() {
            return Ok(existing.into());
        }

        // Only supplied columns are marked Set; the rest stay Unchanged.
        let mut active = existing.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }

        let model = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(model.into())
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.rows_affected, "Cleared blog posts");
        Ok(result.rows_affected)
    }
}
