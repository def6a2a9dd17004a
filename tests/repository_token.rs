mod common;

use shorty::domain::repositories::TokenRepository;
use shorty::error::AppError;
use shorty::infrastructure::persistence::SqliteTokenRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_token() {
    let pool = common::test_pool().await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    let token = repo.create("secret-token").await.unwrap();

    assert!(token.id > 0);
    assert_eq!(token.token, "secret-token");
}

#[tokio::test]
async fn test_create_duplicate_token_is_constraint_violation() {
    let pool = common::test_pool().await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    repo.create("same").await.unwrap();
    let err = repo.create("same").await.unwrap_err();

    assert!(matches!(err, AppError::ConstraintViolation { .. }));
}

#[tokio::test]
async fn test_exists() {
    let pool = common::test_pool().await;
    common::create_test_token(&pool, "stored").await;

    let repo = SqliteTokenRepository::new(Arc::new(pool));

    assert!(repo.exists("stored").await.unwrap());
    assert!(!repo.exists("Stored").await.unwrap());
    assert!(!repo.exists("missing").await.unwrap());
}

#[tokio::test]
async fn test_list_newest_first() {
    let pool = common::test_pool().await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    repo.create("first").await.unwrap();
    repo.create("second").await.unwrap();

    let tokens = repo.list().await.unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].token, "second");
    assert_eq!(tokens[1].token, "first");
}
