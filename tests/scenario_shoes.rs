//! End-to-end walk through registration, duplicate rejection and redirect.

mod common;

use serde_json::Value;

#[tokio::test]
async fn test_shoes_scenario() {
    let app = common::create_test_app();

    let id = common::register(&app.server, &common::shoes_link()).await;
    assert!(!id.is_empty());

    let duplicate = app.server.post("/api/links").json(&common::shoes_link()).await;
    duplicate.assert_status_bad_request();
    assert_eq!(
        duplicate.json::<Value>()["error"]["code"],
        "duplicate_code"
    );

    let redirect = app.server.get("/r/shoes1").await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(
        redirect.header("location"),
        "https://merchant.example/shoes"
    );

    let clicks = app.clicks.clicks().await;
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].link_code, "shoes1");

    app.server.get("/r/unknown").await.assert_status_not_found();
    assert_eq!(app.clicks.clicks().await.len(), 1);
}
