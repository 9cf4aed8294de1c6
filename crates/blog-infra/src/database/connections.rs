#[cfg(feature = "postgres")]
use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

#[cfg(feature = "postgres")]
use super::postgres_repo::PostgresBlogPostRepository;

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool backing the Postgres post store.
///
/// # Example
/// ```ignore
/// let pool = DbPool::connect(&config).await?;
/// let repo = pool.posts();
/// ```
#[cfg(feature = "postgres")]
pub struct DbPool {
    pub conn: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DbPool {
    /// Open the pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to posts database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Posts database connected (pool: {})", config.max_connections);

        Ok(Self::from_connection(conn))
    }

    /// Wrap an already opened connection.
    pub fn from_connection(conn: DbConn) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    /// Post store running on this pool's connection.
    pub fn posts(&self) -> PostgresBlogPostRepository {
        PostgresBlogPostRepository::from_shared(Arc::clone(&self.conn))
    }

    /// Round-trip to the database; used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }
}
