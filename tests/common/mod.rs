#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use catalog_api::{app_router, config::AppConfig, dto::ItemResponse, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Response captured from a single request against the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn item(&self) -> ItemResponse {
        serde_json::from_slice(&self.body).expect("response body should be an item")
    }

    pub fn items(&self) -> Vec<ItemResponse> {
        serde_json::from_slice(&self.body).expect("response body should be an item list")
    }
}

/// Helper harness wrapping the full router over a fresh in-memory repository.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::new("127.0.0.1".into(), 18_080, "test".into()))
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            router: app_router(AppState::in_memory(config)),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request should build"),
            None => builder.body(Body::empty()).expect("request should build"),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Creates an item and returns the created payload.
    pub async fn create_item(&self, name: &str, price: u32) -> ItemResponse {
        let response = self
            .post("/items", serde_json::json!({ "name": name, "price": price }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.item()
    }
}
