use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Builds the application router over a fresh in-memory database.
///
/// The returned context owns the database and must outlive the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let app = router().with_state(AppState::new(db));

    (test, app)
}

/// Sends one request and returns the status with the body as text.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, None).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::DELETE, uri, None).await
}

/// Fetches a JSON array endpoint and returns the `name` of every element.
async fn names(app: &Router, uri: &str) -> Vec<String> {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);

    let values: Vec<Value> = serde_json::from_str(&body).unwrap();
    values
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect()
}

async fn seed_group(app: &Router, name: &str) {
    let (status, _) = post(app, "/groups", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::OK);
}

async fn seed_course(app: &Router, name: &str, course_type: &str) {
    let (status, _) = post(
        app,
        "/courses",
        json!({ "name": name, "description": null, "type": course_type }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
