//! Response handling and transformation.
//!
//! # Responsibilities
//! - Map backend statuses onto page outcomes (redirect, surfaced error)
//! - Relay backend responses through the passthrough endpoints
//! - Convert transport/parse failures into generic 500s
//!
//! # Design Decisions
//! - A 401 from any backend call wins over every other failure
//! - Otherwise the first failing call, in declared order, is surfaced
//! - Relayed bodies keep the backend's status and content type byte for byte

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::backend::{BackendError, BackendResponse};

/// Where unauthenticated page loads are sent.
pub const LOGIN_PATH: &str = "/login";

/// Failure of a page data loader.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("backend rejected the session")]
    Unauthorized,

    #[error("{message} ({status})")]
    Status {
        status: StatusCode,
        message: &'static str,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Unauthorized => {
                (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response()
            }
            PageError::Status { status, message } => {
                (status, Json(json!({ "message": message }))).into_response()
            }
            PageError::Backend(e) => {
                tracing::error!(error = %e, "Page load failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Check every backend response of a page load.
///
/// Each response is paired with the message surfaced if it is the failure
/// reported.
pub fn ensure_ok(responses: &[(&BackendResponse, &'static str)]) -> Result<(), PageError> {
    if responses.iter().any(|(r, _)| r.is_unauthorized()) {
        tracing::debug!("Backend returned 401, redirecting to login");
        return Err(PageError::Unauthorized);
    }

    if let Some((failed, message)) = responses.iter().find(|(r, _)| !r.is_success()) {
        tracing::warn!(status = %failed.status, reason = *message, "Backend call failed");
        return Err(PageError::Status {
            status: failed.status,
            message: *message,
        });
    }

    Ok(())
}

/// Failure of an API passthrough.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("unreadable form: {0}")]
    Form(#[from] FormRejection),

    #[error("request body is not JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            e @ (ApiError::Backend(_)
            | ApiError::Body(_)
            | ApiError::Form(_)
            | ApiError::Payload(_)) => {
                tracing::error!(error = %e, "Passthrough request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Request failed" })),
                )
                    .into_response()
            }
            ApiError::Rejected { status, message } => {
                (status, Json(json!({ "message": message }))).into_response()
            }
        }
    }
}

/// Relay a backend response unchanged.
///
/// JSON bodies are checked to parse before being relayed; anything else is
/// passed through as text.
pub fn relay(response: &BackendResponse) -> Result<Response, ApiError> {
    let content_type = if response.is_json() {
        response.json::<serde::de::IgnoredAny>()?;
        response
            .content_type
            .clone()
            .unwrap_or(HeaderValue::from_static("application/json"))
    } else {
        response
            .content_type
            .clone()
            .unwrap_or(HeaderValue::from_static("text/plain; charset=utf-8"))
    };

    Ok((
        response.status,
        [(header::CONTENT_TYPE, content_type)],
        response.body.clone(),
    )
        .into_response())
}
