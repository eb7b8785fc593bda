mod common;

use common::{BEARER, spawn_app};
use serde_json::{Value, json};
use slug_shortener::domain::repositories::MappingStore;

#[tokio::test]
async fn test_create_premium_slug() {
    let app = spawn_app();

    let response = app
        .server
        .post("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://a.com", "shortUrl": "promo" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Premium Route Created", "shortUrl": "promo" })
    );

    let stored = app.mapping_store.get("promo").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://a.com"));
}

#[tokio::test]
async fn test_create_premium_slug_conflict() {
    let app = spawn_app();

    app.server
        .post("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://a.com", "shortUrl": "promo" }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://b.com", "shortUrl": "promo" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Some Error creating rule" })
    );

    let stored = app.mapping_store.get("promo").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://a.com"));
}

#[tokio::test]
async fn test_update_premium_slug_overwrites() {
    let app = spawn_app();

    app.server
        .post("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://a.com", "shortUrl": "promo" }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .put("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://b.com", "shortUrl": "promo" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Premium Rule Updated", "shortUrl": "promo" })
    );

    let redirect = app.server.get("/promo").await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://b.com");
}

#[tokio::test]
async fn test_update_premium_slug_creates_when_absent() {
    let app = spawn_app();

    let response = app
        .server
        .put("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://new.com", "shortUrl": "fresh" }))
        .await;

    response.assert_status_ok();
    let stored = app.mapping_store.get("fresh").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://new.com"));
}

#[tokio::test]
async fn test_each_premium_write_adds_analytics_row() {
    let app = spawn_app();

    for url in ["https://a.com", "https://b.com"] {
        app.server
            .put("/pro")
            .add_header("Authorization", BEARER)
            .json(&json!({ "originalUrl": url, "shortUrl": "promo" }))
            .await
            .assert_status_ok();
    }

    let analytics = app.analytics_store.clone();
    assert!(common::eventually(|| analytics.row_count("promo") == 2).await);
}

#[tokio::test]
async fn test_premium_validation_order() {
    let app = spawn_app();

    let cases = [
        (json!({ "shortUrl": "promo" }), "No URL provided"),
        (json!({ "originalUrl": "bad", "shortUrl": "promo" }), "Invalid URL"),
        (json!({ "originalUrl": "https://a.com" }), "No short URL provided"),
        (
            json!({ "originalUrl": "https://a.com", "shortUrl": "" }),
            "No short URL provided",
        ),
    ];

    for (body, message) in cases {
        let response = app
            .server
            .post("/pro")
            .add_header("Authorization", BEARER)
            .json(&body)
            .await;

        assert_eq!(response.status_code(), 400, "body: {body}");
        assert_eq!(response.json::<Value>(), json!({ "error": message }));
    }

    assert!(app.mapping_store.is_empty());
}

#[tokio::test]
async fn test_update_validation_uses_same_messages() {
    let app = spawn_app();

    let response = app
        .server
        .put("/pro")
        .add_header("Authorization", BEARER)
        .json(&json!({ "originalUrl": "https://a.com" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No short URL provided" })
    );
}
