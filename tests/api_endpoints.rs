// tests/api_endpoints.rs
//! Endpoint contract tests: routes, JSON shapes, and the per-kind error
//! status codes, exercised through the router with a dummy extractor.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tempfile::TempDir;
use ticklist::api::{router, ApiContext};
use ticklist::domain::tag_record::TagRecord;
use ticklist::domain::tagging::{TagExtractor, TaggingError};
use ticklist::infrastructure::di::test_container::{
    create_test_container, create_test_container_with_extractor,
};
use ticklist::infrastructure::tagging::DummyTagExtractor;
use ticklist::util::testing::init_test_env;

fn scenario_tags() -> TagRecord {
    TagRecord {
        todo: Some(true),
        person: Some("张三".to_string()),
        time: Some("明天".to_string()),
        product: Some("GitHub".to_string()),
    }
}

fn test_router_with(extractor: Arc<dyn TagExtractor>) -> (TempDir, Router) {
    init_test_env();
    let (db, services) = create_test_container_with_extractor(extractor);
    let app = router(ApiContext::new(&services));
    (db, app)
}

fn test_router() -> (TempDir, Router) {
    init_test_env();
    let (db, services) = create_test_container();
    let app = router(ApiContext::new(&services));
    (db, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn given_text_when_extraction_requested_then_tags_are_returned() {
    let (_db, app) =
        test_router_with(Arc::new(DummyTagExtractor::returning(scenario_tags())));

    let (status, body) = send(
        &app,
        "POST",
        "/tag-extraction",
        Some(json!({"text": "明天和张三讨论GitHub项目进展"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tags"]["person"], "张三");
    assert_eq!(body["tags"]["time"], "明天");
    assert_eq!(body["tags"]["product"], "GitHub");
    assert_eq!(body["tags"]["todo"], true);
}

#[tokio::test]
async fn given_bad_extraction_payloads_then_400_with_error_body() {
    let (_db, app) = test_router();

    for payload in [json!({}), json!({"text": ""}), json!({"text": 5})] {
        let (status, body) = send(&app, "POST", "/tag-extraction", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn given_upstream_failures_then_statuses_are_distinct() {
    let cases = [
        (TaggingError::Unauthorized, StatusCode::UNAUTHORIZED),
        (TaggingError::QuotaExhausted, StatusCode::PAYMENT_REQUIRED),
        (TaggingError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
        (TaggingError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let (_db, app) = test_router_with(Arc::new(DummyTagExtractor::failing(error)));
        let (status, body) = send(
            &app,
            "POST",
            "/tag-extraction",
            Some(json!({"text": "anything"})),
        )
        .await;
        assert_eq!(status, expected);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn given_missing_key_and_empty_text_then_errors_are_distinguishable() {
    let (_db, app) =
        test_router_with(Arc::new(DummyTagExtractor::failing(TaggingError::MissingApiKey)));

    let (config_status, config_body) = send(
        &app,
        "POST",
        "/tag-extraction",
        Some(json!({"text": "real text"})),
    )
    .await;
    let (validation_status, validation_body) =
        send(&app, "POST", "/tag-extraction", Some(json!({"text": ""}))).await;

    assert_eq!(config_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(validation_status, StatusCode::BAD_REQUEST);
    assert_ne!(config_body["error"], validation_body["error"]);
}

#[tokio::test]
async fn given_created_entry_then_round_trips_through_get() {
    let (_db, app) = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/entries",
        Some(json!({"text": "买牛奶", "tags": {"todo": true, "time": "今天"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entry = &body["entry"];
    assert_eq!(entry["text"], "买牛奶");
    assert_eq!(entry["tags"]["todo"], true);
    assert_eq!(entry["isExpanded"], false);
    assert!(entry["deletedAt"].is_null());
    assert!(entry["createdAt"].is_string());

    let (status, body) = send(&app, "GET", "/entries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["entries"][0]["text"], "买牛奶");
}

#[tokio::test]
async fn given_blank_entry_text_then_400() {
    let (_db, app) = test_router();

    let (status, _) = send(&app, "POST", "/entries", Some(json!({"text": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_update_then_only_named_fields_change() {
    let (_db, app) = test_router();

    let (_, created) = send(&app, "POST", "/entries", Some(json!({"text": "original"}))).await;
    let id = created["entry"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/entries/{}", id),
        Some(json!({"isExpanded": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["isExpanded"], true);
    assert_eq!(body["entry"]["text"], "original");

    let (status, _) = send(
        &app,
        "PUT",
        "/entries/9999",
        Some(json!({"text": "ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_delete_then_entry_moves_between_views() {
    let (_db, app) = test_router();

    let (_, kept) = send(&app, "POST", "/entries", Some(json!({"text": "active one"}))).await;
    let (_, tossed) = send(&app, "POST", "/entries", Some(json!({"text": "trashed one"}))).await;
    let tossed_id = tossed["entry"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/entries/{}", tossed_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["entry"]["deletedAt"].is_string());

    // Active list has only the kept entry, trash only the deleted one.
    let (_, active) = send(&app, "GET", "/entries", None).await;
    let (_, trash) = send(&app, "GET", "/trash", None).await;
    assert_eq!(active["entries"].as_array().unwrap().len(), 1);
    assert_eq!(active["entries"][0]["id"], kept["entry"]["id"]);
    assert_eq!(trash["entries"].as_array().unwrap().len(), 1);
    assert_eq!(trash["entries"][0]["id"], tossed["entry"]["id"]);
}

#[tokio::test]
async fn given_restore_then_entry_returns_to_active_list() {
    let (_db, app) = test_router();

    let (_, created) = send(&app, "POST", "/entries", Some(json!({"text": "boomerang"}))).await;
    let id = created["entry"]["id"].as_i64().unwrap();

    send(&app, "DELETE", &format!("/entries/{}", id), None).await;
    let (status, body) = send(&app, "PUT", &format!("/trash/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["entry"]["deletedAt"].is_null());

    let (_, active) = send(&app, "GET", "/entries", None).await;
    assert_eq!(active["entries"].as_array().unwrap().len(), 1);
    let (_, trash) = send(&app, "GET", "/trash", None).await;
    assert!(trash["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn given_purge_then_entry_is_gone_from_both_views() {
    let (_db, app) = test_router();

    let (_, created) = send(&app, "POST", "/entries", Some(json!({"text": "goner"}))).await;
    let id = created["entry"]["id"].as_i64().unwrap();

    send(&app, "DELETE", &format!("/entries/{}", id), None).await;
    let (status, body) = send(&app, "DELETE", &format!("/trash/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, active) = send(&app, "GET", "/entries", None).await;
    let (_, trash) = send(&app, "GET", "/trash", None).await;
    assert!(active["entries"].as_array().unwrap().is_empty());
    assert!(trash["entries"].as_array().unwrap().is_empty());

    // Restoring a purged entry fails, purging again is a 404.
    let (status, _) = send(&app, "PUT", &format!("/trash/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/trash/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
