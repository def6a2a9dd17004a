//! SQLite implementation of the url mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    short_slug: String,
    long_url: String,
    protocol: String,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.id, row.short_slug, row.long_url, row.protocol)
    }
}

/// SQLite repository for url mappings.
///
/// Every operation is a single prepared statement; uniqueness of
/// `short_slug` is enforced by the table constraint.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let result = sqlx::query(
            "INSERT INTO url_mappings (short_slug, long_url, protocol) VALUES (?, ?, ?)",
        )
        .bind(&new_mapping.slug)
        .bind(&new_mapping.destination)
        .bind(&new_mapping.scheme)
        .execute(self.pool.as_ref())
        .await?;

        Ok(new_mapping.into_mapping(result.last_insert_rowid()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_slug, long_url, protocol
            FROM url_mappings
            WHERE short_slug = ?
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
