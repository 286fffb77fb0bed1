//! Integration tests for the `/test` diagnostics endpoint.
//!
//! Every store state must produce a 200 with a descriptive body.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use broker_core::{DatabaseEnv, StoreAvailability};
use common::stores::FakeStore;
use common::{FULL_ENV, app_with, get, send};

#[tokio::test]
async fn missing_store_reports_module_not_found() {
    let (status, body) = send(
        app_with(StoreAvailability::Missing, DatabaseEnv::default()),
        get("/test"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "backend": "✅ Running",
            "database": "❌ Database module not found (run enable-database first)",
            "database_url": "❌ Not Set",
            "database_name": "❌ Not Set",
            "connection_status": "Not Connected",
            "collections": []
        })
    );
}

#[tokio::test]
async fn uninitialized_store_reports_warning() {
    let env = DatabaseEnv {
        url_set: true,
        name_set: false,
    };
    let (status, body) = send(app_with(StoreAvailability::Uninitialized, env), get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "❌ Not Set");
}

#[tokio::test]
async fn disconnected_handle_reports_not_initialized() {
    let store = FakeStore::returning("abc123").disconnected();
    let (status, body) = send(app_with(StoreAvailability::ready(store), FULL_ENV), get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
}

#[tokio::test]
async fn failed_open_reports_truncated_error() {
    let reason = "error returned from database: (code: 14) unable to open database file";
    let (status, body) = send(
        app_with(StoreAvailability::Failed(reason.to_string()), FULL_ENV),
        get("/test"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    let excerpt = database.strip_prefix("❌ Error: ").unwrap();
    assert_eq!(excerpt.chars().count(), 50);
    assert!(reason.starts_with(excerpt));
}

#[tokio::test]
async fn working_store_lists_collections() {
    let store = FakeStore::returning("abc123").with_collections(&["inquiry"]);
    let (status, body) = send(app_with(StoreAvailability::ready(store), FULL_ENV), get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["inquiry"]));
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
}

#[tokio::test]
async fn listing_failure_is_reported_not_raised() {
    let message = "connection reset by peer while reading collection catalog from server";
    let store = Arc::new(FakeStore::returning("abc123").failing_listing(message));
    let (status, body) = send(
        app_with(StoreAvailability::Ready(store.clone()), FULL_ENV),
        get("/test"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️"), "{database}");
    let excerpt = database.strip_prefix("⚠️  Connected but Error: ").unwrap();
    assert_eq!(excerpt.chars().count(), 50);
    assert!(format!("Storage error: {message}").starts_with(excerpt));
    assert_eq!(body["collections"], json!([]));
    assert_eq!(store.creates(), 0);
}
