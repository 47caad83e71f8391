//! JSON passthrough endpoints.
//!
//! # Data Flow
//! ```text
//! POST /api/<endpoint>
//!     → body checked to be JSON, forwarded byte for byte
//!     → session::token_headers
//!     → backend POST (same path)
//!     → http::response::relay (status + body type unchanged)
//! ```
//!
//! Calendar reshapes its result and login re-issues the session cookie; the
//! rest relay the backend response as-is.

pub mod calendar;
pub mod email;
pub mod login;
pub mod update;

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::response::ApiError;

/// Check a passthrough body is JSON without reshaping it.
///
/// Field names and casing are the backend's business; only malformed JSON is
/// stopped here.
pub(crate) fn checked_json(body: &[u8]) -> Result<Value, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
