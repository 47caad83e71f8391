//! HTTP client for the backend API.
//!
//! # Responsibilities
//! - Resolve backend paths against the configured base URL
//! - Attach the per-request auth headers
//! - Buffer the response into a [`BackendResponse`] the handlers inspect
//! - Record per-call metrics
//!
//! # Design Decisions
//! - One pooled `reqwest::Client` shared by every request
//! - No retries and no request timeout; only the connect timeout applies
//! - Status checks are left to the caller, a non-OK status is not an error here

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::BackendConfig;
use crate::observability::metrics;

/// Transport and decoding failures talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid backend JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A fully buffered backend response.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub set_cookie: Option<String>,
    pub body: Bytes,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// True when the backend labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_ref()
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BackendError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client from configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of a backend path such as `/api/meals`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a backend path.
    pub async fn get(&self, path: &str, headers: HeaderMap) -> Result<BackendResponse, BackendError> {
        let request = self.http.get(self.endpoint(path)).headers(headers);
        self.send("GET", path, request).await
    }

    /// `GET` a backend path with query parameters.
    pub async fn get_with_query<Q>(
        &self,
        path: &str,
        query: &Q,
        headers: HeaderMap,
    ) -> Result<BackendResponse, BackendError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.endpoint(path)).query(query).headers(headers);
        self.send("GET", path, request).await
    }

    /// `POST` a JSON body to a backend path.
    pub async fn post_json<B>(
        &self,
        path: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<BackendResponse, BackendError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.endpoint(path)).headers(headers).json(body);
        self.send("POST", path, request).await
    }

    /// `POST` an already encoded JSON body, byte for byte.
    pub async fn post_raw(
        &self,
        path: &str,
        body: Bytes,
        headers: HeaderMap,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .http
            .post(self.endpoint(path))
            .headers(headers)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send("POST", path, request).await
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<BackendResponse, BackendError> {
        let start = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::record_backend_call(method, path, "error", start);
                tracing::error!(method, path, error = %e, "Backend unreachable");
                return Err(e.into());
            }
        };

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        metrics::record_backend_call(method, path, status.as_str(), start);
        tracing::debug!(method, path, status = %status, bytes = body.len(), "Backend responded");

        Ok(BackendResponse {
            status,
            content_type,
            set_cookie,
            body,
        })
    }
}
