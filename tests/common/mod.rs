//! Common test utilities for e2e tests
//!
//! Builds the application router over the built-in registry and provides
//! response shapes for decoding bodies.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower::util::ServiceExt;

use network_registry::infrastructure::driven_adapters::network_registry::StaticNetworkRegistry;
use network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by the built-in networks
    pub fn new() -> Self {
        let registry = StaticNetworkRegistry::builtin().expect("built-in registry is valid");
        let router = api_rest::router(AppState::new(Arc::new(registry)));

        Self { router }
    }

    /// Issue a GET request and return status, headers and raw body
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Send an arbitrary request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            request_id,
            body,
        }
    }
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Native currency shape in responses
#[derive(Debug, Deserialize)]
pub struct NativeCurrencyResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Network response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub chain_id: u64,
    pub chain_id_hex: String,
    pub name: String,
    pub native_currency: NativeCurrencyResponse,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
    pub test_net: bool,
}

/// Support check response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub chain_id: i64,
    pub supported: bool,
}

/// Error response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail shape
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
