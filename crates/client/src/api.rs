//! Authenticated HTTP plumbing.
//!
//! The transport is a trait so view models can be exercised against an
//! in-memory implementation; [`HttpTransport`] is the real one, built on
//! `reqwest` with bearer auth from [`ClientConfig`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request against the backend API, addressed by path (the transport
/// owns the base URL).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

/// Status and raw body of a response that did reach the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Human-readable error text: the body's `msg` field when present,
    /// otherwise the raw body.
    pub fn error_message(&self) -> String {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&self.body) {
            if let Some(Value::String(msg)) = map.get("msg") {
                return msg.clone();
            }
        }
        self.body.clone()
    }
}

/// Transport seam: executes a request, failing only when the server was
/// unreachable. Non-success statuses are data, not transport errors.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// Real transport over `reqwest`.
pub struct HttpTransport {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(token) = self.config.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// Typed convenience layer over a transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(config)),
        }
    }

    /// Build a client over any transport (tests inject a fake here).
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    async fn run(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.error_message(),
            });
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.run(ApiRequest::get(path)).await?.json()
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.run(ApiRequest::post(path, body)).await?.json()
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.run(ApiRequest::put(path, body)).await?.json()
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.run(ApiRequest::delete(path)).await?;
        Ok(())
    }
}
