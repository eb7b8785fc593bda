//! PostgreSQL analytics repository tests. `#[sqlx::test]` creates a fresh
//! database per test from `DATABASE_URL`.

use sqlx::PgPool;
use std::sync::Arc;
use slug_shortener::domain::entities::NewAnalyticsRow;
use slug_shortener::domain::repositories::AnalyticsRepository;
use slug_shortener::infrastructure::persistence::PgAnalyticsRepository;

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_then_find(pool: PgPool) {
    let repo = PgAnalyticsRepository::new(Arc::new(pool));

    repo.insert_row(NewAnalyticsRow::new("abc234", "https://a.com"))
        .await
        .unwrap();

    let rows = repo.find_by_slug("abc234").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].real, "https://a.com");
    assert_eq!(rows[0].clicks, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_increment_updates_every_row(pool: PgPool) {
    let repo = PgAnalyticsRepository::new(Arc::new(pool));

    repo.insert_row(NewAnalyticsRow::new("promo", "https://a.com"))
        .await
        .unwrap();
    repo.insert_row(NewAnalyticsRow::new("promo", "https://b.com"))
        .await
        .unwrap();

    assert_eq!(repo.increment_clicks("promo").await.unwrap(), 2);

    let rows = repo.find_by_slug("promo").await.unwrap();
    assert!(rows.iter().all(|row| row.clicks == 1));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_increment_without_row_is_noop(pool: PgPool) {
    let repo = PgAnalyticsRepository::new(Arc::new(pool));

    assert_eq!(repo.increment_clicks("ghost").await.unwrap(), 0);
    assert!(repo.find_by_slug("ghost").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: PgPool) {
    let repo = PgAnalyticsRepository::new(Arc::new(pool));
    assert!(repo.health_check().await);
}
