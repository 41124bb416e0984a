//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    url: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.slug, row.url)
    }
}

/// Returns true if `database_url` points at a transient in-memory database.
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens a connection pool and applies pending migrations.
///
/// An in-memory database lives only as long as its connection, so such URLs
/// get a single connection that is never recycled.
///
/// # Errors
///
/// Returns [`StoreError::Storage`] if the URL is invalid, the database cannot
/// be opened or a migration fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| StoreError::Storage(format!("migration failed: {}", e)))?;

    Ok(pool)
}

/// SQLite repository for link storage and retrieval.
///
/// Slug uniqueness is enforced by the `UNIQUE` constraint on `tinyurls.slug`.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO tinyurls (slug, url)
            VALUES (?1, ?2)
            RETURNING id, slug, url
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::DuplicateSlug(_) => StoreError::DuplicateSlug(new_link.slug.clone()),
            other => other,
        })?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, slug, url FROM tinyurls WHERE slug = ?1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT id, slug, url FROM tinyurls WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query_as::<_, LinkRow>("SELECT id, slug, url FROM tinyurls ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
