//! Endpoints backed by an unconfigured MongoDB store.

use affiliate_tracker::infrastructure::persistence::{
    MongoClickRepository, MongoLinkRepository, MongoStore,
};
use affiliate_tracker::routes::app_router;
use affiliate_tracker::state::{AppState, StoreSettings};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

fn server() -> TestServer {
    let store = Arc::new(MongoStore::unconfigured(Duration::from_secs(1)));

    let state = AppState::new(
        Arc::new(MongoLinkRepository::new(store.clone())),
        Arc::new(MongoClickRepository::new(store.clone())),
        store,
        StoreSettings::default(),
        false,
    );

    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_register_reports_store_unavailable() {
    let response = server()
        .post("/api/links")
        .json(&json!({
            "title": "Shoes",
            "url": "https://merchant.example/shoes",
            "code": "shoes1"
        }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "store_unavailable"
    );
}

#[tokio::test]
async fn test_stats_reports_store_unavailable() {
    server()
        .get("/api/stats")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_redirect_reports_store_unavailable() {
    server()
        .get("/r/shoes1")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
