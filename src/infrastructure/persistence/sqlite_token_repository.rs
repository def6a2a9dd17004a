//! SQLite implementation of the token repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::AuthToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// SQLite repository for registration gate credentials.
pub struct SqliteTokenRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn exists(&self, token: &str) -> Result<bool, AppError> {
        let row = sqlx::query_scalar::<_, i64>("SELECT id FROM auth_tokens WHERE token = ? LIMIT 1")
            .bind(token)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.is_some())
    }

    async fn create(&self, token: &str) -> Result<AuthToken, AppError> {
        let result = sqlx::query("INSERT INTO auth_tokens (token) VALUES (?)")
            .bind(token)
            .execute(self.pool.as_ref())
            .await?;

        Ok(AuthToken {
            id: result.last_insert_rowid(),
            token: token.to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<AuthToken>, AppError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, token FROM auth_tokens ORDER BY id DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, token)| AuthToken { id, token })
            .collect())
    }
}
