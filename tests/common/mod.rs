#![allow(dead_code)]

use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use shorty::infrastructure::persistence::MIGRATOR;
use shorty::routes::app_router;
use shorty::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub const PUBLIC_HOST: &str = "stubhost.com";

/// Fresh in-memory database with the schema applied.
///
/// A single long-lived connection keeps the in-memory database alive.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool, require_auth_token: bool) -> AppState {
    AppState::new(Arc::new(pool), PUBLIC_HOST, require_auth_token)
}

pub fn test_server(state: AppState) -> TestServer {
    let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
    let app = app_router(state).layer(MockConnectInfo(addr));

    TestServer::new(app).unwrap()
}

pub async fn create_test_mapping(pool: &SqlitePool, slug: &str, destination: &str) {
    sqlx::query("INSERT INTO url_mappings (short_slug, long_url, protocol) VALUES (?, ?, 'https')")
        .bind(slug)
        .bind(destination)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_token(pool: &SqlitePool, token: &str) {
    sqlx::query("INSERT INTO auth_tokens (token) VALUES (?)")
        .bind(token)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
