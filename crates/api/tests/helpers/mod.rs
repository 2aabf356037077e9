#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use recordbook_api::{create_api_routes, AppState};
use recordbook_infrastructure::store::{InMemoryRecordStore, StoreFiles};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryRecordStore>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new(api_key: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(InMemoryRecordStore::new(StoreFiles::in_dir(dir.path())));
        let state = AppState::new(store.clone(), api_key.map(String::from));
        let router = Router::new().nest("/api", create_api_routes(state));
        Self { router, store, dir }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
