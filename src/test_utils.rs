//! Test utilities
//!
//! Helpers for exercising the real router in-process, without binding a
//! socket.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use tower::ServiceExt;

use crate::config::Config;
use crate::constants::DATE_FORMAT;
use crate::state::AppState;
use crate::store::InMemoryBatchStore;
use crate::validation::BatchRequestValidator;

/// Create a test application backed by a fresh in-memory store.
pub fn create_test_app() -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "info".to_string(),
        environment: "test".to_string(),
    };

    let state = AppState::new(
        Arc::new(InMemoryBatchStore::new()),
        BatchRequestValidator::with_defaults(),
        config,
    );

    crate::create_router(state)
}

/// Send a request with a JSON body (ignored for GET) and return the response.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> Response {
    let builder = Request::builder().method(method.clone()).uri(uri);
    let request = if method == Method::GET {
        builder.body(Body::empty()).unwrap()
    } else {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build an envelope-wrapped create/update payload, omitting absent fields
/// entirely rather than sending JSON nulls.
pub fn batch_request(
    course_id: Option<&str>,
    name: Option<&str>,
    enrollment_type: Option<&str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Value {
    let mut inner = Map::new();
    if let Some(course_id) = course_id {
        inner.insert("courseId".to_string(), json!(course_id));
    }
    if let Some(name) = name {
        inner.insert("name".to_string(), json!(name));
    }
    if let Some(enrollment_type) = enrollment_type {
        inner.insert("enrollmentType".to_string(), json!(enrollment_type));
    }
    if let Some(start_date) = start_date {
        inner.insert(
            "startDate".to_string(),
            json!(start_date.format(DATE_FORMAT).to_string()),
        );
    }
    if let Some(end_date) = end_date {
        inner.insert(
            "endDate".to_string(),
            json!(end_date.format(DATE_FORMAT).to_string()),
        );
    }

    json!({ "request": inner })
}
