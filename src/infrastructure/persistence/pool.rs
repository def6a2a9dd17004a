//! Connection pool construction.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Connection;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool sizing and lifetime limits.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl From<&Config> for PoolSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_connect_timeout),
            idle_timeout: Duration::from_secs(config.db_idle_timeout),
            max_lifetime: Duration::from_secs(config.db_max_lifetime),
        }
    }
}

/// Opens the pool and verifies connectivity with a ping.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened, or
/// the ping fails. Callers treat this as fatal at startup.
pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(options)
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    Ok(pool)
}

/// Opens the pool with [`connect`] and applies [`MIGRATOR`].
///
/// Used by the server and the admin tool; a fresh database file comes out
/// with the full schema.
///
/// # Errors
///
/// Returns an error if [`connect`] fails or a migration cannot be applied.
pub async fn connect_and_migrate(
    database_url: &str,
    settings: PoolSettings,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(database_url, settings).await?;
    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
