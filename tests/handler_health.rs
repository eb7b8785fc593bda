mod common;

use common::spawn_app;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = spawn_app();

    let response = app.server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["mapping_store"]["status"], "ok");
    assert_eq!(json["checks"]["analytics_store"]["status"], "ok");
    assert_eq!(json["checks"]["analytics_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let app = spawn_app();

    let json = app.server.get("/api/health").await.json::<Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("mapping_store").is_some());
    assert!(json["checks"].get("analytics_store").is_some());
    assert!(json["checks"].get("analytics_queue").is_some());
}

#[tokio::test]
async fn test_cors_headers_on_public_route() {
    let app = spawn_app();

    let response = app
        .server
        .get("/api/health")
        .add_header("Origin", "https://somewhere.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
