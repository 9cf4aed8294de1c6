//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::DbPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DbPool>>,
}

impl AppState {
    /// Build the application state with the configured post store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = {
            if let Some(config) = db_config {
                match DbPool::connect(config).await {
                    Ok(pool) => {
                        let pool = Arc::new(pool);
                        let posts = Arc::new(pool.posts());
                        Self {
                            posts,
                            db: Some(pool),
                        }
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory store.",
                            e
                        );
                        Self::in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory post store.");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory post store");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by the given store and no database pool.
    pub fn with_posts(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    fn in_memory() -> Self {
        Self::with_posts(Arc::new(InMemoryBlogPostRepository::new()))
    }
}
