mod common;

use shorty::domain::entities::NewUrlMapping;
use shorty::domain::repositories::MappingRepository;
use shorty::error::AppError;
use shorty::infrastructure::persistence::SqliteMappingRepository;
use std::sync::Arc;

fn new_mapping(slug: &str, destination: &str) -> NewUrlMapping {
    NewUrlMapping {
        slug: slug.to_string(),
        destination: destination.to_string(),
        scheme: "https".to_string(),
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let pool = common::test_pool().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let first = repo
        .insert(new_mapping("aaaaaaaaaaa", "example.com/1"))
        .await
        .unwrap();
    let second = repo
        .insert(new_mapping("bbbbbbbbbbb", "example.com/2"))
        .await
        .unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.slug, "aaaaaaaaaaa");
    assert_eq!(first.destination, "example.com/1");
    assert_eq!(first.scheme, "https");
}

#[tokio::test]
async fn test_insert_duplicate_slug_is_constraint_violation() {
    let pool = common::test_pool().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    repo.insert(new_mapping("dupdupdupdu", "example.com/1"))
        .await
        .unwrap();

    let err = repo
        .insert(new_mapping("dupdupdupdu", "example.com/2"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ConstraintViolation { .. }));
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[tokio::test]
async fn test_find_by_slug() {
    let pool = common::test_pool().await;
    common::create_test_mapping(&pool, "abc123abc12", "example.com/page").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool));
    let mapping = repo.find_by_slug("abc123abc12").await.unwrap().unwrap();

    assert_eq!(mapping.slug, "abc123abc12");
    assert_eq!(mapping.destination, "example.com/page");
    assert_eq!(mapping.absolute_url(), "https://example.com/page");
}

#[tokio::test]
async fn test_find_by_slug_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert!(repo.find_by_slug("notfound").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_slug_is_case_sensitive_and_exact() {
    let pool = common::test_pool().await;
    common::create_test_mapping(&pool, "CaseSlug123", "example.com").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert!(repo.find_by_slug("caseslug123").await.unwrap().is_none());
    assert!(repo.find_by_slug("CaseSlug12").await.unwrap().is_none());
    assert!(repo.find_by_slug("CaseSlug123").await.unwrap().is_some());
}

#[tokio::test]
async fn test_count_and_ping() {
    let pool = common::test_pool().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    repo.ping().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_mapping(&pool, "one", "example.com").await;
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_pool_is_store_unavailable() {
    let pool = common::test_pool().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    pool.close().await;

    let err = repo.find_by_slug("any").await.unwrap_err();
    assert!(matches!(err, AppError::StoreUnavailable(_)));
}
