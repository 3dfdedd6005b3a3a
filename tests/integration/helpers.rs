//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use mottu_api::{AppState, build_app};
use mottu_core::config::AppConfig;
use mottu_database::DataStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory store behind the router
    pub store: DataStore,
}

impl TestApp {
    /// Create a new test application over empty in-memory tables
    pub fn new() -> Self {
        let store = DataStore::memory();
        let state = AppState::new(AppConfig::default(), store.clone());
        Self {
            router: build_app(state),
            store,
        }
    }

    /// Make an HTTP request with a JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body_str, &[]).await
    }

    /// Make an HTTP request with a raw body and extra headers
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw_len: body_bytes.len(),
        }
    }

    /// POST a row and return its id, asserting 201
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let response = self.request("POST", path, Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create on {path} failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in create response")
    }

    /// Create one zone, yard, status group and status; returns
    /// `(zona_id, patio_id, status_id)`
    pub async fn create_references(&self) -> (i64, i64, i64) {
        let zona = self
            .create("/api/zonas", json!({ "nome": "Norte", "letra": "N" }))
            .await;
        let patio = self.create("/api/patios", json!({ "nome": "Pátio A" })).await;
        let grupo = self
            .create("/api/statusgrupos", json!({ "nome": "Operacional" }))
            .await;
        let status = self
            .create("/api/statuses", json!({ "nome": "OK", "statusGrupoId": grupo }))
            .await;
        (zona, patio, status)
    }
}

/// A moto body with the given plate and chassis
pub fn moto_body(placa: &str, chassi: &str, refs: (i64, i64, i64)) -> Value {
    json!({
        "placa": placa,
        "chassi": chassi,
        "dataEntrada": "2025-03-01T08:30:00Z",
        "zonaId": refs.0,
        "patioId": refs.1,
        "statusId": refs.2,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
    /// Body length in bytes
    pub raw_len: usize,
}

impl TestResponse {
    /// `href` of the link with the given relation, if present
    pub fn link(&self, rel: &str) -> Option<String> {
        self.body["links"]
            .as_array()?
            .iter()
            .find(|l| l["rel"] == rel)
            .and_then(|l| l["href"].as_str())
            .map(String::from)
    }
}
