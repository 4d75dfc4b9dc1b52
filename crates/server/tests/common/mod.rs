#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]
//! Common test utilities for integration tests.
//!
//! Each test builds the real router over a freshly seeded in-memory store
//! and drives it through `tower::ServiceExt::oneshot` — no socket binding.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use stockroom_server::models::{Attribution, Category};
use stockroom_server::seed::SeedData;
use stockroom_server::state::AppState;

/// Test application wrapper using the real routes and state.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Fresh app over the built-in sample seed.
    pub fn new() -> Self {
        Self::with_seed(SeedData::sample())
    }

    /// Fresh app over explicit seed collections.
    pub fn with_seed(seed: SeedData) -> Self {
        let state = AppState::with_seed(seed);
        let router = stockroom_server::router().with_state(state);
        Self { router }
    }

    /// Fresh app with the CORS layer attached (origin config as in prod).
    pub fn with_cors(origins: &[String]) -> Self {
        let state = AppState::with_seed(SeedData::sample());
        let router = stockroom_server::router()
            .layer(stockroom_server::cors_layer(origins))
            .with_state(state);
        Self { router }
    }

    /// The underlying router, for tests that need raw header access.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Issue a request and return status plus parsed JSON body
    /// (`Value::Null` for empty bodies).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }
}

/// Build a category without going through the API.
pub fn category(id: u64, code: &str, name: &str, parent: Option<&Category>) -> Category {
    Category {
        id,
        code: code.to_string(),
        name: name.to_string(),
        description: String::new(),
        parent: parent.map(Category::as_parent_ref),
        attribution: Attribution::stamp(),
    }
}

/// Two-record category seed: Alpha (root) and Beta (child of Alpha).
pub fn tiny_category_seed() -> SeedData {
    let alpha = category(1, "A", "Alpha", None);
    let beta = category(2, "B", "Beta", Some(&alpha));
    SeedData {
        categories: vec![alpha, beta],
        ..SeedData::default()
    }
}

/// Ids of the records in a list response's `data` array.
pub fn data_ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect()
}
