//! End-to-end behaviour of the company API over the public router

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use company_server::{build_router, AppState, MemoryCompanyStore, ServerConfig};

fn app() -> Router {
    build_router(
        AppState::new(MemoryCompanyStore::new()),
        &ServerConfig::default(),
    )
    .expect("router")
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |v| Body::from(v.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn acme_lifecycle() {
    let app = app();

    let (status, created) = call(
        &app,
        Method::POST,
        "/companies",
        Some(json!({"name": "Acme", "location": "NYC"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({"id": 1, "name": "Acme", "location": "NYC"}));

    let (status, fetched) = call(&app, Method::GET, "/companies/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = call(&app, Method::DELETE, "/companies/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"message": "Company deleted successfully"}));

    let (status, missing) = call(&app, Method::GET, "/companies/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({"detail": "Company not found"}));
}

#[tokio::test]
async fn post_then_get_round_trips_many_payloads() {
    let app = app();
    let payloads = [
        ("Acme", "NYC"),
        ("", ""),
        ("Ünïcødé GmbH", "Zürich"),
        ("O'Reilly & Sons", "Sebastopol, CA"),
    ];

    for (name, location) in payloads {
        let (status, created) = call(
            &app,
            Method::POST,
            "/companies",
            Some(json!({"name": name, "location": location})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let id = created["id"].as_i64().unwrap();
        let (_, fetched) = call(&app, Method::GET, &format!("/companies/{id}"), None).await;
        assert_eq!(fetched["name"], name);
        assert_eq!(fetched["location"], location);
    }
}

#[tokio::test]
async fn first_page_of_one_is_first_by_store_order() {
    let app = app();
    for name in ["first", "second"] {
        call(
            &app,
            Method::POST,
            "/companies",
            Some(json!({"name": name, "location": "x"})),
        )
        .await;
    }

    let (status, page) = call(&app, Method::GET, "/companies?skip=0&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, json!([{"id": 1, "name": "first", "location": "x"}]));
}

#[tokio::test]
async fn writes_to_missing_ids_leave_store_untouched() {
    let app = app();
    call(
        &app,
        Method::POST,
        "/companies",
        Some(json!({"name": "Keep", "location": "Me"})),
    )
    .await;
    let (_, before) = call(&app, Method::GET, "/companies", None).await;

    let (status, _) = call(
        &app,
        Method::PUT,
        "/companies/77",
        Some(json!({"name": "x", "location": "y"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, "/companies/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = call(&app, Method::GET, "/companies", None).await;
    assert_eq!(before, after);
}
